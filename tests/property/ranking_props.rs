//! Ranking property tests.
//!
//! - Every ranked entry passes the minimum
//! - Adjacent ranked entries are ordered by direction
//! - Output length is min(length, passing) for non-negative lengths
//! - Equal ratings keep their input order

use proptest::prelude::*;

use super::common::make_rated_entries;
use arxiv_scan::{rank_entries, sort_entries};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_filter_correct(
        ratings in prop::collection::vec(-2i64..15, 0..40),
        rating_min in -2i64..15,
        reverse in any::<bool>(),
    ) {
        let entries = make_rated_entries(&ratings);
        for entry in sort_entries(&entries, rating_min, reverse, None) {
            prop_assert!(entry.rating() >= rating_min);
        }
    }

    #[test]
    fn prop_order_correct(
        ratings in prop::collection::vec(0i64..15, 0..40),
        reverse in any::<bool>(),
    ) {
        let entries = make_rated_entries(&ratings);
        let ranked = sort_entries(&entries, 0, reverse, None);
        for pair in ranked.windows(2) {
            if reverse {
                prop_assert!(pair[0].rating() <= pair[1].rating());
            } else {
                prop_assert!(pair[0].rating() >= pair[1].rating());
            }
        }
    }

    #[test]
    fn prop_truncation(
        ratings in prop::collection::vec(0i64..15, 0..40),
        rating_min in 0i64..15,
        length in 0i64..50,
    ) {
        let entries = make_rated_entries(&ratings);
        let passing = ratings.iter().filter(|&&r| r >= rating_min).count();
        let ranked = sort_entries(&entries, rating_min, false, Some(length));
        prop_assert_eq!(ranked.len(), (length as usize).min(passing));
    }

    #[test]
    fn prop_negative_length_is_unbounded(
        ratings in prop::collection::vec(0i64..15, 0..40),
        length in -100i64..0,
    ) {
        let entries = make_rated_entries(&ratings);
        prop_assert_eq!(
            sort_entries(&entries, 0, false, Some(length)).len(),
            sort_entries(&entries, 0, false, None).len()
        );
    }

    #[test]
    fn prop_ties_are_stable(
        ratings in prop::collection::vec(0i64..4, 0..40),
        reverse in any::<bool>(),
    ) {
        let entries = make_rated_entries(&ratings);
        let ranked = sort_entries(&entries, 0, reverse, None);
        for pair in ranked.windows(2) {
            if pair[0].rating() == pair[1].rating() {
                let a: usize = pair[0].id().parse().unwrap();
                let b: usize = pair[1].id().parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn prop_owning_and_borrowing_agree(
        ratings in prop::collection::vec(0i64..15, 0..40),
        rating_min in 0i64..15,
        reverse in any::<bool>(),
        length in prop::option::of(-2i64..20),
    ) {
        let entries = make_rated_entries(&ratings);
        let borrowed: Vec<String> = sort_entries(&entries, rating_min, reverse, length)
            .iter()
            .map(|e| e.id().to_string())
            .collect();
        let owned: Vec<String> = rank_entries(entries.clone(), rating_min, reverse, length)
            .iter()
            .map(|e| e.id().to_string())
            .collect();
        prop_assert_eq!(borrowed, owned);
    }
}
