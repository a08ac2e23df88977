//! Probes for monitors, GPU and desktop session

pub mod desktop;
pub mod drm;
pub mod gpu;
pub mod monitors;
pub mod xrandr;

pub use desktop::{EnvSource, ProcessEnv, SessionProbe};
pub use drm::DrmBackend;
pub use gpu::{BusLister, GlIdentity, GlxInfoContext, GpuProbe, GraphicsContext, Lspci};
pub use monitors::{DisplayBackend, FallbackBackend, MonitorProbe, RawMonitor};
pub use xrandr::XrandrBackend;
