// src/parsers.rs
use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|e| format!("Invalid number '{s}': {e}"))?;
    if value < min {
        return Err(format!("Value must be >= {min}"));
    }
    if let Some(max) = max
        && value > max
    {
        return Err(format!("Value must be <= {max}"));
    }
    Ok(value)
}

/// Parses a strictly positive `usize`.
///
/// # Errors
/// Returns a message if the input is not a number or is zero.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parses a thread count in `0..=512`; zero means one thread per CPU.
///
/// # Errors
/// Returns a message if the input is not a number or is above 512.
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 0, Some(512))
}

/// Normalizes a file suffix so that it always starts with a dot.
///
/// # Errors
/// Returns a message for empty or whitespace-only input, or input containing
/// a path separator.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "." {
        return Err("Extension must not be empty".to_string());
    }
    if trimmed.contains(['/', '\\']) {
        return Err(format!("Extension must not contain a path separator: {trimmed}"));
    }
    if trimmed.starts_with('.') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!(".{trimmed}"))
    }
}

/// Validates a directory name to prune.
///
/// # Errors
/// Returns a message for empty names or names containing a path separator.
pub fn parse_dir_name(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Directory name must not be empty".to_string());
    }
    if trimmed.contains(['/', '\\']) {
        return Err(format!(
            "Directory name must not contain a path separator: {trimmed}"
        ));
    }
    Ok(trimmed.to_string())
}
