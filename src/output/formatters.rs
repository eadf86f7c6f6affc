//! Formatting utilities for terminal output

use crate::config::GameConfig;
use crate::core::{Code, Color, Response};
use colored::{ColoredString, Colorize};

/// Format a response as peg symbols: `●` black, `○` white, `·` empty
#[must_use]
pub fn response_pegs(response: Response, config: &GameConfig) -> String {
    let black = usize::from(response.black());
    let white = usize::from(response.white());
    let empty = config.code_length().saturating_sub(black + white);

    format!("{}{}{}", "●".repeat(black), "○".repeat(white), "·".repeat(empty))
}

/// A color name painted in its own color
#[must_use]
pub fn color_swatch(color: Color) -> ColoredString {
    let name = color.to_string();
    let painted = match color {
        Color::Green => name.green(),
        Color::Red => name.red(),
        Color::Blue => name.blue(),
        Color::Yellow => name.yellow(),
        Color::Orange => name.truecolor(255, 165, 0),
        Color::Purple => name.truecolor(160, 32, 240),
        Color::Cyan => name.cyan(),
        Color::Magenta => name.magenta(),
        Color::White => name.white(),
        Color::Black => name.bright_black(),
    };
    painted.bold()
}

/// Format a code as painted color names
#[must_use]
pub fn code_swatches(code: &Code) -> String {
    let names: Vec<String> = code
        .colors()
        .iter()
        .map(|&color| color_swatch(color).to_string())
        .collect();
    format!("[{}]", names.join(", "))
}

/// One line listing the palette in play with its digit shortcuts
#[must_use]
pub fn palette_legend(config: &GameConfig) -> String {
    Color::ALL
        .iter()
        .take(usize::from(config.total_colors()))
        .map(|&color| format!("{}={}", color.index(), color_swatch(color)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
