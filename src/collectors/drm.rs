//! Monitor backend reading the kernel DRM subsystem through sysfs

use crate::collectors::monitors::{DisplayBackend, RawMonitor};
use crate::error::Result;
use crate::utils::edid::{self, Edid};
use crate::utils::{file::*, parsing::*};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DRM_PATH: &str = "/sys/class/drm";

/// Enumerates connected connectors under `/sys/class/drm/card*-*`
#[derive(Debug, Clone)]
pub struct DrmBackend {
    root: PathBuf,
    scale_factor: u32,
}

impl DrmBackend {
    pub fn new<P: Into<PathBuf>>(root: P, scale_factor: u32) -> Self {
        Self {
            root: root.into(),
            scale_factor: scale_factor.max(1),
        }
    }

    /// Connector directories sorted by name so the order is stable across runs
    fn connectors(&self) -> Result<Vec<PathBuf>> {
        let mut connectors: Vec<PathBuf> = fs::read_dir(&self.root)?
            .flatten()
            .filter(|entry| {
                let name = entry.file_name();
                let name = name.to_string_lossy();
                name.starts_with("card") && name.contains('-')
            })
            .map(|entry| entry.path())
            .collect();
        connectors.sort();
        Ok(connectors)
    }

    fn read_connector(&self, path: &Path) -> Option<RawMonitor> {
        let status = read_first_line(path.join("status")).ok()?;
        if status != "connected" {
            return None;
        }

        let mode = match read_first_line(path.join("modes")).map(|m| parse_mode_resolution(&m)) {
            Ok(Ok(mode)) => mode,
            _ => {
                debug!("Skipping {}: no usable mode", path.display());
                return None;
            }
        };

        let edid = read_edid(path).unwrap_or_default();

        Some(RawMonitor {
            width_mm: edid.width_mm,
            height_mm: edid.height_mm,
            manufacturer: edid.manufacturer,
            model: edid.model,
            ..RawMonitor::from_physical(mode.width, mode.height, self.scale_factor)
        })
    }

    /// EDID of the connector named like an X output (`DP-1` matches `card0-DP-1`)
    pub fn edid_for_output(&self, output: &str) -> Option<Edid> {
        let suffix = format!("-{}", output);
        self.connectors()
            .ok()?
            .iter()
            .find(|path| {
                path.file_name()
                    .map_or(false, |name| name.to_string_lossy().ends_with(&suffix))
            })
            .and_then(|path| read_edid(path))
    }
}

fn read_edid(connector: &Path) -> Option<Edid> {
    let bytes = read_bytes_nonempty(connector.join("edid"))?;
    match edid::parse(&bytes) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!("Ignoring EDID of {}: {}", connector.display(), err);
            None
        }
    }
}

impl DisplayBackend for DrmBackend {
    fn monitors(&self) -> Result<Vec<RawMonitor>> {
        Ok(self
            .connectors()?
            .iter()
            .filter_map(|path| self.read_connector(path))
            .collect())
    }
}

/// Scale factor from an explicit override, else a `GDK_SCALE`-style value, else 1
pub fn resolve_scale_factor(configured: Option<u32>, env_value: Option<&str>) -> u32 {
    configured
        .filter(|scale| *scale >= 1)
        .or_else(|| env_value.and_then(parse_scale_factor))
        .unwrap_or(1)
}
