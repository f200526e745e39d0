//! Terminal rendering: banner, JSON panel, error styling.
//!
//! The string builders are pure so the report path can be tested against
//! in-memory writers; only `banner` touches the terminal directly.

use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write, stdout};

const TITLE: &str = "WEATHER CONSOLE";
const ATTRIBUTION: &str = "data provided by openweathermap.org";

/// Clear the screen and draw the title box plus attribution line.
pub fn banner() -> io::Result<()> {
    let mut out = stdout();
    let title_box = header_box(TITLE);

    execute!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(title_box.as_str().cyan().to_string()),
    )?;

    writeln!(out, "{}", ATTRIBUTION.dimmed())?;
    writeln!(out)?;

    Ok(())
}

/// Double-line box with the title centered, 46 columns wide.
fn header_box(title: &str) -> String {
    const WIDTH: usize = 46;

    let inner = WIDTH - 2;
    let len = title.chars().count().min(inner);
    let left = (inner - len) / 2;
    let right = inner - len - left;

    format!(
        "╔{bar}╗\n║{space:>left$}{title}{space:>right$}║\n╚{bar}╝\n",
        bar = "═".repeat(inner),
        space = "",
    )
}

/// Bordered, titled panel around a multi-line body. Width adapts to the
/// longest body line.
pub fn json_panel(title: &str, body: &str) -> String {
    let title_len = title.chars().count();
    let content_width = body
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(title_len + 2);

    let mut panel = String::new();

    panel.push_str("╭─ ");
    panel.push_str(title);
    panel.push(' ');
    panel.push_str(&"─".repeat(content_width - title_len - 1));
    panel.push_str("╮\n");

    for line in body.lines() {
        let pad = content_width - line.chars().count();
        panel.push_str("│ ");
        panel.push_str(line);
        panel.push_str(&" ".repeat(pad));
        panel.push_str(" │\n");
    }

    panel.push('╰');
    panel.push_str(&"─".repeat(content_width + 2));
    panel.push('╯');

    panel
}

/// Red bold styling for error lines.
pub fn error_text(text: &str) -> String {
    text.red().bold().to_string()
}
