//! Session and report structures

use super::hardware::{GpuInfo, MonitorInfo};
use super::Probed;
use std::fmt;

pub const UNKNOWN_DE: &str = "Unknown DE";
pub const UNKNOWN_WM: &str = "Unknown WM";

/// Display server protocol of the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionType {
    Wayland,
    X11,
    Unknown,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionType::Wayland => "Wayland",
            SessionType::X11 => "X11",
            SessionType::Unknown => "Unknown",
        })
    }
}

/// Desktop session metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub session_type: SessionType,
    pub desktop_environment: Probed<String>,
    /// Session desktop identifier; not a window manager process name
    pub window_manager: Probed<String>,
}

/// Everything displayfetch gathers in one run
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub session: SessionInfo,
    /// In display enumeration order
    pub monitors: Vec<MonitorInfo>,
    pub gpu: GpuInfo,
}
