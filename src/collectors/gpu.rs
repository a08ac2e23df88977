//! GPU identification: driver strings first, PCI listing as fallback

use crate::data::GpuInfo;
use crate::error::{DisplayfetchError, Result};
use crate::utils::{command::*, parsing::*};
use log::debug;
use std::time::Duration;

const VENDOR_FIELD: &str = "OpenGL vendor string";
const RENDERER_FIELD: &str = "OpenGL renderer string";

/// Device class markers of display adapters in `lspci` output
const GPU_CLASS_MARKERS: [&str; 2] = ["VGA", "3D"];

/// Vendor and renderer strings reported by an active GL context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlIdentity {
    pub vendor: String,
    pub renderer: String,
}

/// Primary tier: a graphics driver that can name itself
pub trait GraphicsContext {
    fn query(&self) -> Result<GlIdentity>;
}

/// Fallback tier: raw text of a PCI bus listing
pub trait BusLister {
    fn list(&self) -> Result<String>;
}

impl<L: BusLister + ?Sized> BusLister for &L {
    fn list(&self) -> Result<String> {
        (**self).list()
    }
}

/// Asks `glxinfo -B`, which needs a reachable X or XWayland display
#[derive(Debug, Clone)]
pub struct GlxInfoContext {
    program: String,
    timeout: Duration,
}

impl GlxInfoContext {
    pub fn new<S: Into<String>>(program: S, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl GraphicsContext for GlxInfoContext {
    fn query(&self) -> Result<GlIdentity> {
        let output = run_command_timeout(&self.program, &["-B"], self.timeout)?;
        parse_glxinfo(&output)
    }
}

/// Runs `lspci` without arguments
#[derive(Debug, Clone)]
pub struct Lspci {
    program: String,
    timeout: Duration,
}

impl Lspci {
    pub fn new<S: Into<String>>(program: S, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl BusLister for Lspci {
    fn list(&self) -> Result<String> {
        run_command_timeout(&self.program, &[], self.timeout)
    }
}

pub struct GpuProbe<C, L> {
    context: C,
    lister: L,
}

impl<C: GraphicsContext, L: BusLister> GpuProbe<C, L> {
    pub fn new(context: C, lister: L) -> Self {
        Self { context, lister }
    }

    /// First tier that produces something wins; never fails.
    pub fn identify(&self) -> GpuInfo {
        match self.context.query() {
            Ok(identity) if !identity.vendor.is_empty() || !identity.renderer.is_empty() => {
                return GpuInfo::Driver {
                    vendor: identity.vendor,
                    renderer: identity.renderer,
                };
            }
            Ok(_) => debug!("Graphics context returned empty identity strings"),
            Err(err) => debug!("Graphics context unavailable: {}", err),
        }

        match self.lister.list() {
            Ok(listing) => {
                let lines = gpu_lines(&listing);
                if lines.is_empty() {
                    debug!("PCI listing contained no display adapters");
                    GpuInfo::Unavailable
                } else {
                    GpuInfo::BusListing(lines)
                }
            }
            Err(err) => {
                debug!("PCI listing unavailable: {}", err);
                GpuInfo::Unavailable
            }
        }
    }
}

/// Trimmed listing lines carrying a display-adapter class marker (case-sensitive)
pub fn gpu_lines(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter(|line| GPU_CLASS_MARKERS.iter().any(|marker| line.contains(marker)))
        .map(|line| line.trim().to_string())
        .collect()
}

pub fn parse_glxinfo(output: &str) -> Result<GlIdentity> {
    match (find_field(output, VENDOR_FIELD), find_field(output, RENDERER_FIELD)) {
        (Some(vendor), Some(renderer)) => Ok(GlIdentity { vendor, renderer }),
        _ => Err(DisplayfetchError::detection(
            "glxinfo output lacks vendor or renderer string",
        )),
    }
}
