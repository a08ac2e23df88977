//! Data structures produced by the collectors

pub mod hardware;
pub mod system;

pub use hardware::{GpuInfo, MonitorInfo, Resolution};
pub use system::{Report, SessionInfo, SessionType};

/// Outcome of a single probed field.
///
/// Collectors never substitute placeholder text themselves; the formatter
/// decides what an `Unavailable` field looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probed<T> {
    Resolved(T),
    Unavailable,
}

impl<T> Probed<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Probed::Resolved(_))
    }
}

impl Probed<String> {
    /// Build from an optional backend string; blank values count as missing.
    pub fn from_text(value: Option<String>) -> Self {
        match value {
            Some(text) if !text.trim().is_empty() => Probed::Resolved(text.trim().to_string()),
            _ => Probed::Unavailable,
        }
    }

    /// Resolved text, or `default` when the probe came back empty
    pub fn display_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self {
            Probed::Resolved(value) => value.as_str(),
            Probed::Unavailable => default,
        }
    }
}
