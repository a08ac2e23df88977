use displayfetch::collectors::{DisplayBackend, DrmBackend, FallbackBackend, MonitorProbe, XrandrBackend};
use displayfetch::display::render;
use displayfetch::Probed;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

/// Base EDID block with vendor, monitor name and a detailed timing size
fn edid(vendor: [u8; 2], name: &str, width_mm: u16, height_mm: u16) -> Vec<u8> {
    let mut block = vec![0u8; 128];
    block[..8].copy_from_slice(&[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
    block[8..10].copy_from_slice(&vendor);

    // detailed timing descriptor #1 with a non-zero pixel clock
    block[54] = 0x02;
    block[54 + 12] = (width_mm & 0xFF) as u8;
    block[54 + 13] = (height_mm & 0xFF) as u8;
    block[54 + 14] = (((width_mm >> 8) as u8) << 4) | ((height_mm >> 8) as u8 & 0x0F);

    // monitor name descriptor
    block[72 + 3] = 0xFC;
    let text = &mut block[72 + 5..72 + 18];
    text.fill(b' ');
    text[..name.len()].copy_from_slice(name.as_bytes());
    text[name.len()] = 0x0A;

    block
}

fn connector(root: &Path, name: &str, modes: &str, edid: Option<Vec<u8>>) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("status"), "connected\n").unwrap();
    fs::write(dir.join("modes"), modes).unwrap();
    fs::write(dir.join("edid"), edid.unwrap_or_default()).unwrap();
}

#[test]
fn test_drm_tree_to_report_lines() {
    let root = TempDir::new().unwrap();
    connector(
        root.path(),
        "card0-DP-1",
        "1920x1200\n1600x1200\n",
        Some(edid([0x10, 0xAC], "DELL U2415", 518, 324)),
    );
    connector(root.path(), "card0-HDMI-A-1", "1280x720\n", None);

    let monitors = MonitorProbe::new(DrmBackend::new(root.path(), 1)).enumerate();
    assert_eq!(monitors.len(), 2);
    assert_eq!(monitors[0].manufacturer, Probed::Resolved("Dell".to_string()));
    assert_eq!(monitors[0].name(), "Dell U2415");
    assert_eq!(monitors[1].name(), "Unknown Manufacturer Unknown Model");
    assert_eq!(monitors[1].diagonal_inches, None);

    let report = displayfetch::Report {
        session: displayfetch::SessionInfo {
            session_type: displayfetch::SessionType::X11,
            desktop_environment: Probed::Unavailable,
            window_manager: Probed::Unavailable,
        },
        monitors,
        gpu: displayfetch::GpuInfo::Unavailable,
    };
    let lines = render(&report, false);
    assert_eq!(lines[1], "  Dell U2415: 1920x1200, 24.1\" diagonal");
    assert_eq!(lines[2], "  Unknown Manufacturer Unknown Model: 1280x720");
}

#[test]
fn test_connectors_are_sorted_by_name() {
    let root = TempDir::new().unwrap();
    connector(root.path(), "card1-DP-3", "2560x1440\n", None);
    connector(root.path(), "card0-eDP-1", "1920x1080\n", None);

    let monitors = DrmBackend::new(root.path(), 1).monitors().unwrap();
    let widths: Vec<u32> = monitors.iter().map(|m| m.logical_width).collect();
    assert_eq!(widths, vec![1920, 2560]);
}

#[test]
fn test_scaled_drm_monitor_round_trips_to_mode() {
    let root = TempDir::new().unwrap();
    connector(root.path(), "card0-eDP-1", "2880x1800\n", None);

    let monitors = MonitorProbe::new(DrmBackend::new(root.path(), 2)).enumerate();
    assert_eq!(monitors[0].resolution.to_string(), "2880x1800");
}

#[test]
fn test_missing_drm_root_gives_empty_monitor_list() {
    let root = TempDir::new().unwrap();
    let monitors = MonitorProbe::new(DrmBackend::new(root.path().join("missing"), 1)).enumerate();
    assert!(monitors.is_empty());
}

const XRANDR_QUERY: &str = "\
Screen 0: minimum 320 x 200, current 1920 x 1200, maximum 16384 x 16384
DP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 0mm x 0mm
   2560x1440     59.95 +
   1920x1200     59.95
   1920x1080     60.00*
HDMI-A-1 disconnected (normal left inverted right x axis y axis)
";

#[test]
fn test_xrandr_current_mode_with_drm_edid_names() {
    let root = TempDir::new().unwrap();
    connector(
        root.path(),
        "card0-DP-1",
        "2560x1440\n1920x1200\n",
        Some(edid([0x10, 0xAC], "DELL U2415", 518, 324)),
    );

    let drm = DrmBackend::new(root.path(), 1);
    let xrandr = XrandrBackend::new("xrandr", Duration::from_millis(500), 1, drm.clone());
    let monitors: Vec<_> = xrandr
        .monitors_from(XRANDR_QUERY)
        .into_iter()
        .map(displayfetch::collectors::monitors::monitor_info)
        .collect();

    assert_eq!(monitors.len(), 1);
    // the mode in use, not the preferred 2560x1440 sysfs reports
    assert_eq!(monitors[0].resolution.to_string(), "1920x1080");
    assert_eq!(monitors[0].name(), "Dell U2415");
    // 0mm from xrandr, so the EDID size is used
    assert_eq!(format!("{:.1}", monitors[0].diagonal_inches.unwrap()), "24.1");

    let preferred = DrmBackend::new(root.path(), 1).monitors().unwrap();
    assert_eq!(preferred[0].logical_width, 2560);
}

#[test]
fn test_missing_xrandr_falls_back_to_drm() {
    let root = TempDir::new().unwrap();
    connector(root.path(), "card0-DP-1", "2560x1440\n", None);

    let drm = DrmBackend::new(root.path(), 1);
    let xrandr = XrandrBackend::new("displayfetch-missing-xrandr", Duration::from_millis(500), 1, drm.clone());
    let monitors = MonitorProbe::new(FallbackBackend::new(xrandr, drm)).enumerate();

    assert_eq!(monitors.len(), 1);
    assert_eq!(monitors[0].resolution.to_string(), "2560x1440");
}
