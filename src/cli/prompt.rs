//! Interactive fallback when no source path is given.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{IconError, Result};

/// Ask for the source image path.
///
/// An empty answer is an error. End of input (Ctrl-D) counts as a
/// cancellation and exits 130 like Ctrl-C; this deliberately differs from
/// treating a closed stdin as a plain failure. Ctrl-C itself is handled by
/// the process-wide handler in `main`.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<PathBuf> {
    writeln!(out, "appicon: Xcode app icon generator")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "\nPlease enter the path to your 1024x1024 icon image:")?;
    writeln!(out, "(Supported formats: PNG, JPG, JPEG)")?;
    write!(out, "\nPath: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(IconError::Cancelled);
    }

    let path = clean_path(&line);
    if path.is_empty() {
        return Err(IconError::NoInput);
    }

    Ok(PathBuf::from(path))
}

/// Trim whitespace and the quotes terminals add to dragged-in paths.
fn clean_path(line: &str) -> &str {
    let trimmed = line.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].trim();
        }
    }
    trimmed
}
