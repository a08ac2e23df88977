//! Monitor enumeration

use crate::data::hardware::diagonal_inches;
use crate::data::{MonitorInfo, Probed, Resolution};
use crate::error::Result;
use log::{debug, warn};

/// Per-monitor facts as the display backend reports them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMonitor {
    pub logical_width: u32,
    pub logical_height: u32,
    pub scale_factor: u32,
    pub width_mm: Option<u32>,
    pub height_mm: Option<u32>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
}

impl RawMonitor {
    /// Split a physical pixel size into logical size and scale.
    ///
    /// A size the scale does not divide evenly is kept as-is at scale 1,
    /// so `logical * scale` always gives back the physical size.
    pub fn from_physical(width: u32, height: u32, scale_factor: u32) -> Self {
        let scale = scale_factor.max(1);
        let (logical_width, logical_height, scale_factor) = if width % scale == 0 && height % scale == 0 {
            (width / scale, height / scale, scale)
        } else {
            debug!("{}x{} is not divisible by scale {}, reporting unscaled", width, height, scale);
            (width, height, 1)
        };
        Self {
            logical_width,
            logical_height,
            scale_factor,
            ..Default::default()
        }
    }
}

/// Source of connected monitors, in enumeration order
pub trait DisplayBackend {
    fn monitors(&self) -> Result<Vec<RawMonitor>>;
}

/// Asks `primary` first and `fallback` when it errors or finds nothing
pub struct FallbackBackend<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackBackend<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: DisplayBackend, F: DisplayBackend> DisplayBackend for FallbackBackend<P, F> {
    fn monitors(&self) -> Result<Vec<RawMonitor>> {
        match self.primary.monitors() {
            Ok(monitors) if !monitors.is_empty() => return Ok(monitors),
            Ok(_) => debug!("Primary display backend found no monitors"),
            Err(err) => debug!("Primary display backend unavailable: {}", err),
        }
        self.fallback.monitors()
    }
}

pub struct MonitorProbe<B> {
    backend: B,
}

impl<B: DisplayBackend> MonitorProbe<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Never fails: a backend error yields an empty list.
    pub fn enumerate(&self) -> Vec<MonitorInfo> {
        match self.backend.monitors() {
            Ok(raw) => {
                debug!("Display backend reported {} monitor(s)", raw.len());
                raw.into_iter().map(monitor_info).collect()
            }
            Err(err) => {
                warn!("Monitor enumeration failed: {}", err);
                Vec::new()
            }
        }
    }
}

pub fn monitor_info(raw: RawMonitor) -> MonitorInfo {
    MonitorInfo {
        resolution: Resolution::new(raw.logical_width, raw.logical_height).scaled(raw.scale_factor),
        diagonal_inches: diagonal_inches(raw.width_mm, raw.height_mm),
        manufacturer: Probed::from_text(raw.manufacturer),
        model: Probed::from_text(raw.model),
    }
}
