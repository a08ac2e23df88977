//! displayfetch library
//!
//! Prints a snapshot of the local graphical environment: connected monitors,
//! GPU identity and desktop session metadata.

pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod utils;

pub use config::Config;
pub use data::{GpuInfo, MonitorInfo, Probed, Report, SessionInfo, SessionType};
pub use error::{DisplayfetchError, Result};

use collectors::{
    drm::resolve_scale_factor, BusLister, DisplayBackend, DrmBackend, EnvSource, FallbackBackend,
    GlxInfoContext, GpuProbe, GraphicsContext, Lspci, MonitorProbe, ProcessEnv, SessionProbe,
    XrandrBackend,
};

/// Run every probe once against the live system
pub fn collect_report(config: &Config) -> Report {
    let probes = &config.probes;
    let timeout = probes.command_timeout();
    let scale = resolve_scale_factor(probes.scale_factor, ProcessEnv.var("GDK_SCALE").as_deref());

    // The X server knows the mode in use; sysfs only knows the preferred one
    let drm = DrmBackend::new(probes.drm_root(), scale);
    let xrandr = XrandrBackend::new(probes.xrandr_command.as_str(), timeout, scale, drm.clone());

    assemble_report(
        FallbackBackend::new(xrandr, drm),
        GlxInfoContext::new(probes.glxinfo_command.as_str(), timeout),
        Lspci::new(probes.lspci_command.as_str(), timeout),
        ProcessEnv,
    )
}

/// Run the probes sequentially over the given data sources
pub fn assemble_report<B, C, L, E>(backend: B, context: C, lister: L, env: E) -> Report
where
    B: DisplayBackend,
    C: GraphicsContext,
    L: BusLister,
    E: EnvSource,
{
    Report {
        session: SessionProbe::new(env).identify(),
        monitors: MonitorProbe::new(backend).enumerate(),
        gpu: GpuProbe::new(context, lister).identify(),
    }
}
