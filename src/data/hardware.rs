//! Monitor and GPU information structures

use super::Probed;
use std::fmt;

pub const UNKNOWN_MANUFACTURER: &str = "Unknown Manufacturer";
pub const UNKNOWN_MODEL: &str = "Unknown Model";
pub const UNKNOWN_GPU: &str = "Unknown GPU";

const MM_PER_INCH: f64 = 25.4;

/// Pixel dimensions of a monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scale each axis independently; a scale of zero is treated as 1.
    pub fn scaled(self, scale: u32) -> Self {
        let scale = scale.max(1);
        Self {
            width: self.width.saturating_mul(scale),
            height: self.height.saturating_mul(scale),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A single connected monitor
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorInfo {
    pub manufacturer: Probed<String>,
    pub model: Probed<String>,
    /// Physical pixels (logical geometry times scale factor)
    pub resolution: Resolution,
    /// Present only when both physical dimensions are known and non-zero
    pub diagonal_inches: Option<f64>,
}

impl MonitorInfo {
    /// "<manufacturer> <model>" with placeholders for missing parts
    pub fn name(&self) -> String {
        format!(
            "{} {}",
            self.manufacturer.display_or(UNKNOWN_MANUFACTURER),
            self.model.display_or(UNKNOWN_MODEL)
        )
    }
}

/// Diagonal size in inches from physical millimetres.
pub fn diagonal_inches(width_mm: Option<u32>, height_mm: Option<u32>) -> Option<f64> {
    match (width_mm, height_mm) {
        (Some(w), Some(h)) if w > 0 && h > 0 => {
            let (w, h) = (f64::from(w), f64::from(h));
            Some((w * w + h * h).sqrt() / MM_PER_INCH)
        }
        _ => None,
    }
}

/// GPU identity, by whichever tier produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpuInfo {
    /// Vendor and renderer strings from the graphics driver
    Driver { vendor: String, renderer: String },
    /// Raw device lines from the PCI listing
    BusListing(Vec<String>),
    Unavailable,
}

impl fmt::Display for GpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuInfo::Driver { vendor, renderer } => write!(f, "{} - {}", vendor, renderer),
            GpuInfo::BusListing(lines) => write!(f, "{}", lines.join(", ")),
            GpuInfo::Unavailable => f.write_str(UNKNOWN_GPU),
        }
    }
}
