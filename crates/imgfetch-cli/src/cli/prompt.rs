//! Interactive URL prompt.

use anyhow::{Context, Result};
use imgfetch_core::report::PROMPT;
use std::io::{BufRead, Write};

/// Print the prompt to `out` and read one line of whitespace-separated URLs.
///
/// End of input without a line yields an empty list.
pub(super) fn read_urls<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<Vec<String>> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("read URLs from stdin")?;
    Ok(line.split_whitespace().map(str::to_string).collect())
}
