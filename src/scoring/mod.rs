// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how entries get their numbers and their order.
//!
//! `core` turns rating tables into per-entry ratings and marks. `ranking`
//! filters and orders the evaluated entries for display.

mod core;
pub mod ranking;

pub use core::*;
