//! String parsing utilities

use crate::data::Resolution;
use crate::error::{DisplayfetchError, Result};

/// Extract the value after the first colon, if non-empty
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Value of a `key: value` line anywhere in `text`
pub fn find_field(text: &str, key: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| line.starts_with(key))
        .and_then(extract_after_colon)
}

/// Parse a DRM mode string such as `1920x1200` or `1920x1080i`
pub fn parse_mode_resolution(mode: &str) -> Result<Resolution> {
    let invalid = || DisplayfetchError::parse(format!("Invalid mode: {}", mode));
    let (w, h) = mode.trim().split_once('x').ok_or_else(invalid)?;
    let h: String = h.chars().take_while(char::is_ascii_digit).collect();
    let width = w.parse().map_err(|_| invalid())?;
    let height = h.parse().map_err(|_| invalid())?;
    Ok(Resolution::new(width, height))
}

/// Parse a positive integer scale factor, as found in `GDK_SCALE`
pub fn parse_scale_factor(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|scale| *scale >= 1)
}
