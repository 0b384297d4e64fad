use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application options that can be set via the CLI
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Record file merged into the store after the seed batch
    pub records_file: Option<PathBuf>,
    /// Records inserted individually after any file merge
    pub sets: Vec<(String, u32)>,
    /// Postal codes to query; empty means the canonical pair
    pub codes: Vec<String>,
    /// Run the boundary helper demos as well
    pub demo: bool,
    /// Verbose logging
    pub verbose: bool,
}

/// Validate a postal code argument
///
/// Codes are short ASCII alphanumeric strings; anything else is a CLI
/// error rather than a store-level miss.
pub fn parse_code(s: &str) -> Result<String> {
    let code = s.trim();

    if code.is_empty() {
        anyhow::bail!("Postal code must not be empty");
    }
    if code.len() > 10 {
        anyhow::bail!("Postal code too long: {}", code);
    }
    if !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        anyhow::bail!("Postal code must be ASCII alphanumeric: {}", code);
    }

    Ok(code.to_string())
}

/// Parse a population count argument
pub fn parse_count(s: &str) -> Result<u32> {
    s.trim()
        .parse()
        .with_context(|| format!("Invalid count value: {}", s))
}

/// Parse a CODE=COUNT record argument
pub fn parse_record(s: &str) -> Result<(String, u32)> {
    let (code, count) = s
        .split_once('=')
        .with_context(|| format!("Record must be in CODE=COUNT format: {}", s))?;

    Ok((parse_code(code)?, parse_count(count)?))
}
