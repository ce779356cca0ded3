pub mod achievements;
pub mod exercises;
pub mod glossary;
pub mod lesson;
pub mod modules;
pub mod progress;
pub mod quiz;
pub mod search;
pub mod validate;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthChar;

use crate::progress::tracker::ProgressState;

/// Load a progress snapshot handed in by the caller. No path means a fresh
/// state; the CLI never writes progress anywhere.
pub(crate) fn load_state(path: Option<&Path>) -> Result<ProgressState> {
    match path {
        Some(p) => {
            let raw = fs::read_to_string(p)
                .with_context(|| format!("Failed to read progress snapshot {}", p.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse progress snapshot {}", p.display()))
        }
        None => Ok(ProgressState::default()),
    }
}

/// Width-aware truncation for terminal display.
pub(crate) fn truncate(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            out.push_str("...");
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 8), "a longer...");
    }

    #[test]
    fn missing_snapshot_path_yields_default_state() {
        let state = load_state(None).unwrap();
        assert_eq!(state.total_completed(), 0);
    }
}
