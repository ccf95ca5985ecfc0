// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal reports for the helpdex CLI.
//!
//! Both reports are drawn in a fixed-width box. Colors follow OneDark, or One
//! Light when `HELPDEX_THEME=light`. `NO_COLOR` or a non-TTY stdout prints
//! plain text so piped output stays greppable.

use std::fmt::Display;
use std::sync::OnceLock;
use std::time::Duration;

use helpdex::{IndexStats, RankedDocument};

/// Columns between the two `│` borders.
pub const BOX_WIDTH: usize = 64;

/// What a piece of text means, not what color it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Muted,
    Label,
    Strong,
    Good,
    Slow,
}

impl Tone {
    fn rgb(self, light: bool) -> (u8, u8, u8) {
        match (self, light) {
            (Tone::Muted, false) => (92, 99, 112),
            (Tone::Muted, true) => (160, 161, 167),
            (Tone::Label, false) => (86, 182, 194),
            (Tone::Label, true) => (1, 132, 188),
            (Tone::Strong, false) => (166, 226, 46),
            (Tone::Strong, true) => (68, 140, 39),
            (Tone::Good, false) => (152, 195, 121),
            (Tone::Good, true) => (80, 161, 79),
            (Tone::Slow, false) => (229, 192, 123),
            (Tone::Slow, true) => (193, 132, 1),
        }
    }
}

fn light_theme() -> bool {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    *LIGHT.get_or_init(|| {
        std::env::var("HELPDEX_THEME").is_ok_and(|theme| theme.eq_ignore_ascii_case("light"))
    })
}

fn use_colors() -> bool {
    static COLORS: OnceLock<bool> = OnceLock::new();
    *COLORS.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

fn paint(tone: Tone, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let (r, g, b) = tone.rgb(light_theme());
    let weight = if bold { "\x1b[1m" } else { "" };
    format!("{}\x1b[38;2;{};{};{}m{}\x1b[0m", weight, r, g, b, text)
}

/// Columns `s` occupies on screen; escape sequences take none.
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // skip through the terminating 'm' of an SGR sequence
            chars.by_ref().find(|&c| c == 'm');
        } else {
            width += 1;
        }
    }
    width
}

/// Right-pad to `width` visible columns.
fn fill(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible_width(s))))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX
// ═══════════════════════════════════════════════════════════════════════════

fn row(content: &str) {
    let border = paint(Tone::Muted, false, "│");
    println!("{}{}{}", border, fill(content, BOX_WIDTH), border);
}

fn top(label: &str) {
    let label = format!("─ {} ", paint(Tone::Label, true, label));
    let rule = "─".repeat(BOX_WIDTH.saturating_sub(visible_width(&label)));
    println!(
        "{}{}{}",
        paint(Tone::Muted, false, "┌"),
        label,
        paint(Tone::Muted, false, &format!("{}┐", rule))
    );
}

fn bottom() {
    println!("{}", paint(Tone::Muted, false, &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

fn stat_row(name: &str, value: impl Display) {
    row(&format!(" {:<18}{:>10}", name, value));
}

// ═══════════════════════════════════════════════════════════════════════════
// VALUES
// ═══════════════════════════════════════════════════════════════════════════

/// Score tinted by how close it is to the best hit.
fn score_cell(score: u64, best: u64) -> String {
    let text = format!("{:>7}", score);
    match score_tone(score, best) {
        Tone::Strong => paint(Tone::Strong, true, &text),
        tone => paint(tone, false, &text),
    }
}

fn score_tone(score: u64, best: u64) -> Tone {
    if best == 0 {
        Tone::Muted
    } else if score.saturating_mul(2) >= best {
        Tone::Strong
    } else if score.saturating_mul(5) >= best {
        Tone::Good
    } else {
        Tone::Muted
    }
}

fn timing(elapsed: Duration) -> String {
    let ms = elapsed.as_secs_f64() * 1000.0;
    let tone = if ms < 5.0 {
        Tone::Good
    } else if ms < 50.0 {
        Tone::Slow
    } else {
        Tone::Muted
    };
    paint(tone, false, &format!("{:.2} ms", ms))
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Summary box printed after `helpdex index`.
pub fn print_index_summary(
    stats: &IndexStats,
    stopwords: usize,
    title_weight: usize,
    elapsed: Duration,
) {
    top("INDEX");
    stat_row("documents", stats.documents);
    stat_row("keywords", stats.keywords);
    stat_row("postings", stats.postings);
    stat_row("occurrences", stats.total_occurrences);
    stat_row("stopwords", stopwords);
    stat_row("title weight", title_weight);
    row(&format!(" {:<18}{}", "built in", timing(elapsed)));
    bottom();
}

/// Ranked results printed after `helpdex search`.
pub fn print_search_results(
    query: &str,
    results: &[RankedDocument],
    limit: usize,
    elapsed: Duration,
) {
    top(&format!("SEARCH \"{}\"", query));

    if results.is_empty() {
        row(&format!(" {}", paint(Tone::Muted, false, "no matching documents")));
    }

    let best = results.first().map_or(0, |r| r.score);
    for (rank, result) in results.iter().take(limit).enumerate() {
        row(&format!(
            " {:>4} {} {}",
            format!("{}.", rank + 1),
            score_cell(result.score, best),
            result.doc_id
        ));
    }

    if results.len() > limit {
        let more = format!("... {} more", results.len() - limit);
        row(&format!(" {}", paint(Tone::Muted, false, &more)));
    }

    row(&format!(" {} results in {}", results.len(), timing(elapsed)));
    bottom();
}
