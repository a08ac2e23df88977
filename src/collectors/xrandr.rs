//! Monitor backend asking the X server (or XWayland) through `xrandr --query`

use crate::collectors::drm::DrmBackend;
use crate::collectors::monitors::{DisplayBackend, RawMonitor};
use crate::data::Resolution;
use crate::error::Result;
use crate::utils::{command::*, parsing::*};
use log::debug;
use std::time::Duration;

/// One connected, active output from `xrandr --query`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrandrOutput {
    pub name: String,
    /// Current mode in physical pixels, rotation applied
    pub resolution: Resolution,
    pub width_mm: Option<u32>,
    pub height_mm: Option<u32>,
}

/// Current modes come from the X server; names and EDID sizes from DRM sysfs
#[derive(Debug, Clone)]
pub struct XrandrBackend {
    program: String,
    timeout: Duration,
    scale_factor: u32,
    edid_source: DrmBackend,
}

impl XrandrBackend {
    pub fn new<S: Into<String>>(program: S, timeout: Duration, scale_factor: u32, edid_source: DrmBackend) -> Self {
        Self {
            program: program.into(),
            timeout,
            scale_factor,
            edid_source,
        }
    }

    /// Turn `xrandr --query` text into monitors, filling names and missing sizes from EDID
    pub fn monitors_from(&self, query: &str) -> Vec<RawMonitor> {
        parse_xrandr(query)
            .into_iter()
            .map(|out| {
                let edid = self.edid_source.edid_for_output(&out.name).unwrap_or_default();
                let (width_mm, height_mm) = match (out.width_mm, out.height_mm) {
                    (Some(w), Some(h)) if w > 0 && h > 0 => (Some(w), Some(h)),
                    _ => (edid.width_mm, edid.height_mm),
                };
                RawMonitor {
                    width_mm,
                    height_mm,
                    manufacturer: edid.manufacturer,
                    model: edid.model,
                    ..RawMonitor::from_physical(out.resolution.width, out.resolution.height, self.scale_factor)
                }
            })
            .collect()
    }
}

impl DisplayBackend for XrandrBackend {
    fn monitors(&self) -> Result<Vec<RawMonitor>> {
        let output = run_command_timeout(&self.program, &["--query"], self.timeout)?;
        Ok(self.monitors_from(&output))
    }
}

/// Connected outputs with an active mode, in xrandr order
pub fn parse_xrandr(text: &str) -> Vec<XrandrOutput> {
    let mut outputs = Vec::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        if line.starts_with(char::is_whitespace) || !line.contains(" connected") {
            continue;
        }
        let name = line.split_whitespace().next().unwrap_or_default().to_string();

        let mut current = None;
        while let Some(mode_line) = lines.next_if(|l| l.starts_with(char::is_whitespace)) {
            let mut tokens = mode_line.split_whitespace();
            let mode = tokens.next();
            if current.is_none() && tokens.any(|t| t.contains('*')) {
                current = mode.and_then(|m| parse_mode_resolution(m).ok());
            }
        }

        let header = parse_header_geometry(line);
        let resolution = match (current, header) {
            (Some(mode), Some((_, true))) => Resolution::new(mode.height, mode.width),
            (Some(mode), _) => mode,
            (None, Some((geometry, _))) => geometry,
            (None, None) => {
                debug!("Skipping xrandr output {}: connected but inactive", name);
                continue;
            }
        };

        let (width_mm, height_mm) = match parse_size_mm(line) {
            Some((w, h)) => (Some(w), Some(h)),
            None => (None, None),
        };
        outputs.push(XrandrOutput {
            name,
            resolution,
            width_mm,
            height_mm,
        });
    }

    outputs
}

/// `1080x1920+0+0 left` from an output header, and whether it is rotated a quarter turn
fn parse_header_geometry(line: &str) -> Option<(Resolution, bool)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let index = tokens
        .iter()
        .position(|t| t.starts_with(|c: char| c.is_ascii_digit()) && t.contains('x') && t.contains('+'))?;
    let geometry = parse_mode_resolution(tokens[index].split('+').next()?).ok()?;
    let rotated = matches!(tokens.get(index + 1), Some(&"left") | Some(&"right"));
    Some((geometry, rotated))
}

/// `597mm x 336mm` from an output header
fn parse_size_mm(line: &str) -> Option<(u32, u32)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.windows(3).find_map(|window| {
        if window[1] != "x" {
            return None;
        }
        let w = window[0].strip_suffix("mm")?.parse().ok()?;
        let h = window[2].strip_suffix("mm")?.parse().ok()?;
        Some((w, h))
    })
}
