// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the needle CLI.
//!
//! Colors come from OneDark on dark terminals and One Light on light ones.
//! `NO_COLOR` or a non-TTY stdout switches styling off, so piped tables stay
//! plain text with the same column layout.
//!
//! # Theme detection order
//!
//! 1. `NEEDLE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme
//!
//! Frame builders return strings and leave printing to the caller.

use std::env;
use std::sync::OnceLock;

/// Inner width of a frame, between the two vertical borders.
pub const FRAME_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn from_env() -> Self {
        let explicit = env::var("NEEDLE_THEME").ok();
        let background = env::var("COLORFGBG").ok();
        Self::resolve(explicit.as_deref(), background.as_deref())
    }

    /// `COLORFGBG` is "fg;bg"; ANSI backgrounds 7 and up, except 8, are light.
    fn resolve(explicit: Option<&str>, colorfgbg: Option<&str>) -> Self {
        match explicit.map(str::to_ascii_lowercase).as_deref() {
            Some("light" | "l") => return Theme::Light,
            Some("dark" | "d") => return Theme::Dark,
            _ => {}
        }

        let light_background = colorfgbg
            .and_then(|value| value.rsplit(';').next())
            .and_then(|bg| bg.parse::<u8>().ok())
            .is_some_and(|bg| bg >= 7 && bg != 8);

        if light_background {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn current() -> Self {
        static THEME: OnceLock<Theme> = OnceLock::new();
        *THEME.get_or_init(Theme::from_env)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
    Dim,
}

impl Color {
    /// OneDark and One Light values, in that order.
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        let (dark, light) = match self {
            Color::Red => ((224, 108, 117), (228, 86, 73)),
            Color::Green => ((152, 195, 121), (80, 161, 79)),
            Color::Yellow => ((229, 192, 123), (193, 132, 1)),
            Color::Blue => ((97, 175, 239), (64, 120, 242)),
            Color::Cyan => ((86, 182, 194), (1, 132, 188)),
            Color::Gray => ((92, 99, 112), (160, 161, 167)),
            Color::Accent => ((102, 217, 239), (1, 112, 158)),
        };
        match theme {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }

    fn escape(self, weight: Weight, theme: Theme) -> String {
        let (r, g, b) = self.rgb(theme);
        let weight = match weight {
            Weight::Normal => "",
            Weight::Bold => "\x1b[1m",
            Weight::Dim => "\x1b[2m",
        };
        format!("{}\x1b[38;2;{};{};{}m", weight, r, g, b)
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint_with(enabled: bool, color: Color, weight: Weight, text: &str) -> String {
    if enabled {
        format!("{}{}{}", color.escape(weight, Theme::current()), text, RESET)
    } else {
        text.to_string()
    }
}

pub fn paint(color: Color, weight: Weight, text: &str) -> String {
    paint_with(use_colors(), color, weight, text)
}

/// Number of terminal columns `s` occupies, ignoring SGR escapes.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", " ".repeat(pad), s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

// ═══════════════════════════════════════════════════════════════════════════
// FRAMES
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    paint(Color::Gray, Weight::Normal, text)
}

/// │ content          │
pub fn row(content: &str) -> String {
    format!("{}{}{}", border("│"), pad_right(content, FRAME_WIDTH), border("│"))
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    let label = format!("─ {} ", paint(Color::Cyan, Weight::Bold, label));
    let rule = "─".repeat(FRAME_WIDTH.saturating_sub(visible_len(&label)));
    format!("{}{}{}", border("┌"), label, border(&format!("{}┐", rule)))
}

/// └──────────────────┘
pub fn section_bot() -> String {
    border(&format!("└{}┘", "─".repeat(FRAME_WIDTH)))
}

/// Centered title in a double-line box, three lines.
pub fn title(text: &str) -> String {
    let edge = |s: &str| paint(Color::Blue, Weight::Normal, s);
    let text = paint(Color::Accent, Weight::Bold, text);
    let spare = FRAME_WIDTH.saturating_sub(visible_len(&text));
    let left = spare / 2;

    [
        edge(&format!("╔{}╗", "═".repeat(FRAME_WIDTH))),
        format!(
            "{}{}{}{}{}",
            edge("║"),
            " ".repeat(left),
            text,
            " ".repeat(spare - left),
            edge("║")
        ),
        edge(&format!("╚{}╝", "═".repeat(FRAME_WIDTH))),
    ]
    .join("\n")
}

// ═══════════════════════════════════════════════════════════════════════════
// VALUES
// ═══════════════════════════════════════════════════════════════════════════

/// Milliseconds, right-aligned to ten columns: green under 5, yellow under 50.
pub fn timing_ms(value: f64) -> String {
    let color = if value < 5.0 {
        Color::Green
    } else if value < 50.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    paint(color, Weight::Normal, &format!("{:>10.3}", value))
}

/// Edit distance badge; exact hits stand out.
pub fn distance_label(distance: usize) -> String {
    let text = format!("d={}", distance);
    match distance {
        0 => paint(Color::Green, Weight::Bold, &text),
        1 => paint(Color::Cyan, Weight::Normal, &text),
        _ => paint(Color::Yellow, Weight::Normal, &text),
    }
}

pub fn muted(text: &str) -> String {
    paint(Color::Gray, Weight::Dim, text)
}

/// Print an error with its cause chain to stderr
pub fn error(err: &anyhow::Error) {
    let colored = env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr);
    eprintln!("{}: {}", paint_with(colored, Color::Red, Weight::Bold, "error"), err);
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
