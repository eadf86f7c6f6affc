//! Code list loading utilities
//!
//! Reads predefined secrets, one code per line, for the code-breaker game.

use crate::config::GameConfig;
use crate::core::Code;
use std::fs;
use std::io;
use std::path::Path;

/// Load codes from a file
///
/// Each non-empty line is parsed with [`Code::parse`]; lines starting with
/// `#` and lines that do not fit `config` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use mastermind_solver::codebook::load_from_file;
/// use mastermind_solver::config::GameConfig;
///
/// let codes = load_from_file("codes.txt", &GameConfig::default()).unwrap();
/// println!("Loaded {} codes", codes.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, config: &GameConfig) -> io::Result<Vec<Code>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(content.lines(), config))
}

/// Convert string slices to codes, skipping invalid entries
///
/// # Examples
/// ```
/// use mastermind_solver::codebook::codes_from_slice;
/// use mastermind_solver::config::GameConfig;
///
/// let codes = codes_from_slice(&["0123", "red red blue blue", "9999"], &GameConfig::default());
/// assert_eq!(codes.len(), 2);
/// ```
#[must_use]
pub fn codes_from_slice(slice: &[&str], config: &GameConfig) -> Vec<Code> {
    parse_lines(slice.iter().copied(), config)
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>, config: &GameConfig) -> Vec<Code> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Code::parse(trimmed, config).ok()
            }
        })
        .collect()
}
