// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for ranked listings.
//!
//! Each entry prints as a small block:
//!
//! ```text
//! ( 7) https://arxiv.org/abs/2401.12345
//!      Ada Lovelace, Alan Turing, Grace Hopper
//!      Graph Neural Networks for Something Long Enough That It Has To
//!      Wrap Onto A Second Line
//!      submitted 2024-01-22 18:00:00+00:00 on cs.LG
//! ```
//!
//! Matched authors are red, matched title characters blue, the rating and
//! link green. Colors follow the terminal theme. OneDark for dark terminals,
//! One Light for light ones. Respects `NO_COLOR` and non-TTY detection for
//! pipelines.
//!
//! # Theme detection order
//!
//! 1. `ARXIV_SCAN_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use arxiv_scan::Entry;

/// Abstract page prefix; the entry id is appended.
pub const ABS_URL: &str = "https://arxiv.org/abs/";

/// Author names are cut off with "..." once their total length passes this.
pub const AUTHOR_WIDTH: usize = 90;

/// Title lines break at the first space after this many characters.
pub const TITLE_WIDTH: usize = 90;

const INDENT: &str = "     ";

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override
    if let Ok(theme) = std::env::var("ARXIV_SCAN_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. macOS: Check system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const UNDERLINE: &str = "\x1b[4m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(BLUE);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wraps text in escape codes, or passes it through when colors are off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Painter for stdout: enabled only on a TTY without `NO_COLOR`.
    pub fn for_stdout() -> Self {
        Self::new(use_colors())
    }

    /// Apply theme color with optional modifiers
    pub fn themed(&self, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
        if self.enabled {
            format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Apply modifiers only
    pub fn styled(&self, modifiers: &[&str], text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", modifiers.join(""), text, RESET)
        } else {
            text.to_string()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ENTRY RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Author line: underlined names, matched ones in red, "..." once too long.
fn render_authors(entry: &Entry, painter: &Painter) -> String {
    let mut parts = Vec::new();
    let mut width = 0;
    for (i, name) in entry.authors().iter().enumerate() {
        let name_len = name.chars().count();
        if width + name_len > AUTHOR_WIDTH {
            parts.push(painter.styled(&[UNDERLINE], "..."));
            break;
        }
        width += name_len;
        if entry.is_author_marked(i) {
            parts.push(painter.themed(RED, &[UNDERLINE], name));
        } else {
            parts.push(painter.styled(&[UNDERLINE], name));
        }
    }
    parts.join(&painter.styled(&[UNDERLINE], ", "))
}

/// Title lines, wrapped at spaces, matched characters in blue.
///
/// A line breaks at the first space once it holds more than `TITLE_WIDTH`
/// characters; that space is dropped.
fn render_title(entry: &Entry, painter: &Painter) -> Vec<String> {
    let mut lines = vec![String::new()];
    let mut width = 0;
    for (i, c) in entry.title().chars().enumerate() {
        if c == ' ' && width > TITLE_WIDTH {
            width = 0;
            lines.push(String::new());
            continue;
        }
        width += 1;
        let mut buf = [0u8; 4];
        let text: &str = c.encode_utf8(&mut buf);
        if let Some(line) = lines.last_mut() {
            if entry.is_title_marked(i) {
                line.push_str(&painter.themed(BLUE, &[], text));
            } else {
                line.push_str(text);
            }
        }
    }
    lines
}

/// Render one entry as a multi-line block (no trailing newline).
pub fn render_entry(entry: &Entry, painter: &Painter) -> String {
    let rating = painter.themed(GREEN, &[], &format!("({:2})", entry.rating()));
    let link = format!(
        "{}{}",
        painter.themed(GREEN, &[], ABS_URL),
        painter.themed(GREEN, &[], entry.id())
    );

    let mut out = vec![
        format!("{} {}", rating, link),
        format!("{}{}", INDENT, render_authors(entry, painter)),
    ];
    for line in render_title(entry, painter) {
        out.push(format!("{}{}", INDENT, line));
    }
    out.push(format!(
        "{}submitted {} on {}",
        INDENT,
        entry.date_submitted().format("%Y-%m-%d %H:%M:%S%:z"),
        entry.category()
    ));
    out.join("\n")
}

/// Print ranked entries to stdout, most relevant first as given.
pub fn print_entries(entries: &[&Entry]) {
    let painter = Painter::for_stdout();
    for entry in entries {
        println!("{}", render_entry(entry, &painter));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
