use displayfetch::collectors::{BusLister, DisplayBackend, GlIdentity, GraphicsContext, RawMonitor};
use displayfetch::display::{render, render_with, RenderOptions};
use displayfetch::{assemble_report, DisplayfetchError, GpuInfo, Result, SessionType};
use std::collections::HashMap;

struct Monitors(Vec<RawMonitor>);

impl DisplayBackend for Monitors {
    fn monitors(&self) -> Result<Vec<RawMonitor>> {
        Ok(self.0.clone())
    }
}

struct NoGlContext;

impl GraphicsContext for NoGlContext {
    fn query(&self) -> Result<GlIdentity> {
        Err(DisplayfetchError::detection("no current GL context"))
    }
}

struct GlContext;

impl GraphicsContext for GlContext {
    fn query(&self) -> Result<GlIdentity> {
        Ok(GlIdentity {
            vendor: "NVIDIA Corporation".to_string(),
            renderer: "NVIDIA GeForce GTX 1080/PCIe/SSE2".to_string(),
        })
    }
}

struct Listing(&'static str);

impl BusLister for Listing {
    fn list(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn dell_u2415() -> RawMonitor {
    RawMonitor {
        logical_width: 1920,
        logical_height: 1200,
        scale_factor: 1,
        width_mm: Some(518),
        height_mm: Some(324),
        manufacturer: Some("Dell".to_string()),
        model: Some("U2415".to_string()),
    }
}

const LSPCI: &str = "00:00.0 Host bridge: Intel Corporation Xeon E3-1200 v5/E3-1500 v5\n\
01:00.0 VGA compatible controller: NVIDIA Corp GP104\n\
01:00.1 Audio device: NVIDIA Corporation GP104 High Definition Audio Controller\n";

#[test]
fn test_wayland_session_with_lspci_fallback() {
    let report = assemble_report(
        Monitors(vec![dell_u2415()]),
        NoGlContext,
        Listing(LSPCI),
        env(&[("WAYLAND_DISPLAY", "wayland-0"), ("DISPLAY", ":0")]),
    );

    assert_eq!(report.session.session_type, SessionType::Wayland);
    assert_eq!(
        report.gpu,
        GpuInfo::BusListing(vec!["01:00.0 VGA compatible controller: NVIDIA Corp GP104".to_string()])
    );

    let text = render(&report, true).join("\n");
    assert!(text.contains("Session Type: Wayland"));
    assert!(text.contains("Desktop Environment: Unknown DE"));
    assert!(text.contains("Window Manager: Unknown WM"));
    // sqrt(518² + 324²) / 25.4 = 24.05
    assert!(text.contains("Dell U2415: 1920x1200, 24.1\" diagonal"));
    assert!(text.contains("NVIDIA Corp GP104"));
}

#[test]
fn test_plain_report_has_no_session_block() {
    let report = assemble_report(
        Monitors(vec![dell_u2415()]),
        GlContext,
        Listing(""),
        env(&[("DISPLAY", ":0"), ("XDG_CURRENT_DESKTOP", "KDE")]),
    );

    let lines = render(&report, false);
    assert_eq!(
        lines,
        vec![
            "Monitors:",
            "  Dell U2415: 1920x1200, 24.1\" diagonal",
            "",
            "GPU:",
            "  NVIDIA Corporation - NVIDIA GeForce GTX 1080/PCIe/SSE2",
        ]
    );
    assert!(lines.iter().all(|line| !line.contains('\x1b')));
}

#[test]
fn test_nothing_detected_still_renders() {
    let report = assemble_report(Monitors(Vec::new()), NoGlContext, Listing(""), env(&[]));

    let lines = render_with(
        &report,
        &RenderOptions {
            color: None,
            show_session: true,
        },
    );
    assert_eq!(
        lines,
        vec![
            "Session Type: Unknown",
            "Desktop Environment: Unknown DE",
            "Window Manager: Unknown WM",
            "",
            "Monitors:",
            "",
            "GPU:",
            "  Unknown GPU",
        ]
    );
}

#[test]
fn test_hidpi_monitor_without_edid_size() {
    let report = assemble_report(
        Monitors(vec![RawMonitor {
            logical_width: 1920,
            logical_height: 1080,
            scale_factor: 2,
            ..Default::default()
        }]),
        NoGlContext,
        Listing(""),
        env(&[]),
    );

    let lines = render(&report, false);
    assert_eq!(lines[1], "  Unknown Manufacturer Unknown Model: 3840x2160");
}
