//! Report rendering and ANSI color handling

use crate::config::Config;
use crate::data::system::{UNKNOWN_DE, UNKNOWN_WM};
use crate::data::{MonitorInfo, Report};
use log::warn;
use std::collections::HashMap;
use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";
pub const DEFAULT_VALUE_COLOR: &str = "\x1b[36m";

/// How a report is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape code wrapped around content lines; `None` renders plain text
    pub color: Option<String>,
    /// Prefix the report with session type, desktop environment and window manager
    pub show_session: bool,
}

impl RenderOptions {
    /// `true` gives the colorized report with a session block, `false` the plain one.
    pub fn from_toggle(color_enabled: bool) -> Self {
        Self {
            color: color_enabled.then(|| DEFAULT_VALUE_COLOR.to_string()),
            show_session: color_enabled,
        }
    }

    pub fn from_config(config: &Config, color_enabled: bool) -> Self {
        Self {
            color: color_enabled.then(|| resolve_color(&config.colors, &config.display.value_color)),
            show_session: config.display.show_session.unwrap_or(color_enabled),
        }
    }
}

pub fn render(report: &Report, color_enabled: bool) -> Vec<String> {
    render_with(report, &RenderOptions::from_toggle(color_enabled))
}

pub fn render_with(report: &Report, options: &RenderOptions) -> Vec<String> {
    let paint = |line: String| match &options.color {
        Some(code) => format!("{}{}{}", code, line, RESET),
        None => line,
    };

    let mut lines = Vec::new();

    if options.show_session {
        let session = &report.session;
        lines.push(paint(format!("Session Type: {}", session.session_type)));
        lines.push(paint(format!(
            "Desktop Environment: {}",
            session.desktop_environment.display_or(UNKNOWN_DE)
        )));
        lines.push(paint(format!(
            "Window Manager: {}",
            session.window_manager.display_or(UNKNOWN_WM)
        )));
        lines.push(String::new());
    }

    lines.push("Monitors:".to_string());
    lines.extend(report.monitors.iter().map(|m| paint(monitor_line(m))));

    lines.push(String::new());
    lines.push("GPU:".to_string());
    lines.push(paint(format!("  {}", report.gpu)));

    lines
}

fn monitor_line(monitor: &MonitorInfo) -> String {
    let mut line = format!("  {}: {}", monitor.name(), monitor.resolution);
    if let Some(diagonal) = monitor.diagonal_inches {
        line.push_str(&format!(", {:.1}\" diagonal", diagonal));
    }
    line
}

pub fn print_report(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

pub fn stdout_is_tty() -> bool {
    // SAFETY: isatty only inspects the descriptor
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

/// Look `key` up in the configured palette, else treat it as a color itself
pub fn resolve_color(colors: &HashMap<String, String>, key: &str) -> String {
    colors
        .get(key)
        .map(|color| hex_to_ansi(color))
        .unwrap_or_else(|| hex_to_ansi(key))
}

pub fn hex_to_ansi(color: &str) -> String {
    if let Some(hex) = color.strip_prefix('#').filter(|h| h.len() == 6 && h.is_ascii()) {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return format!("\x1b[38;2;{};{};{}m", r, g, b);
        }
    }

    get_ansi_color_code(color).unwrap_or_else(|| {
        warn!("Unknown color '{}', falling back to default", color);
        RESET.to_string()
    })
}

fn get_ansi_color_code(color_name: &str) -> Option<String> {
    let code = match color_name.to_lowercase().as_str() {
        // Standard 8 colors (30-37)
        "black" => "\x1b[30m",
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" | "purple" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        "white" => "\x1b[37m",

        // Bright colors (90-97)
        "bright_black" | "gray" | "grey" => "\x1b[90m",
        "bright_red" | "orange" => "\x1b[91m",
        "bright_green" => "\x1b[92m",
        "bright_yellow" => "\x1b[93m",
        "bright_blue" => "\x1b[94m",
        "bright_magenta" | "violet" => "\x1b[95m",
        "bright_cyan" => "\x1b[96m",
        "bright_white" => "\x1b[97m",

        "reset" | "default" => RESET,
        _ => return None,
    };
    Some(code.to_string())
}
