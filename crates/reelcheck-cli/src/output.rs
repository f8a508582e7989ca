// reelcheck - Media asset validation and cataloging
// Copyright (C) 2025 reelcheck contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.


//! Shared output formatting utilities for CLI commands.
//!
//! Everything here writes to stderr: stdout carries only the JSON report.
//!
//! # Examples
//!
//! ```ignore
//! output::header("Scanning albums in media/");
//! output::detail("Video clips", "12");
//! output::success("All 4 album(s) are valid");
//! ```

use console::style;

/// Print a success message with green checkmark emoji.
pub fn success(msg: &str) {
    eprintln!("{} {}", style("✅").green().bold(), msg);
}

/// Print an error message with red X emoji.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("❌").red().bold(), msg);
}

/// Print a warning message with yellow warning emoji.
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠️").yellow(), msg);
}

/// Print a detail line with key-value formatting.
///
/// The key is displayed in regular text, and the value is highlighted in cyan.
pub fn detail(key: &str, value: &str) {
    eprintln!("  {}: {}", key, style(value).cyan());
}

/// Print a header message with film emoji.
pub fn header(msg: &str) {
    eprintln!("{} {}", style("🎬").green().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_functions_compile() {
        let _ = success;
        let _ = error;
        let _ = warning;
        let _ = detail;
        let _ = header;
    }
}
