//! Desktop session detection from environment variables

use crate::data::{Probed, SessionInfo, SessionType};
use std::collections::HashMap;
use std::env;

const WAYLAND_VARS: &[&str] = &["WAYLAND_DISPLAY"];
const X11_VARS: &[&str] = &["DISPLAY"];
const DESKTOP_VARS: &[&str] = &["XDG_CURRENT_DESKTOP", "DESKTOP_SESSION"];
// Session identifiers; no window manager process is inspected
const WM_VARS: &[&str] = &["XDG_SESSION_DESKTOP", "GDMSESSION"];

/// Read-only view of environment variables
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Value of the first key that is set and non-empty
pub fn first_non_empty<E: EnvSource + ?Sized>(env: &E, keys: &[&str]) -> Probed<String> {
    keys.iter()
        .filter_map(|key| env.var(key))
        .find(|value| !value.is_empty())
        .map_or(Probed::Unavailable, Probed::Resolved)
}

pub struct SessionProbe<E> {
    env: E,
}

impl<E: EnvSource> SessionProbe<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn identify(&self) -> SessionInfo {
        SessionInfo {
            session_type: self.session_type(),
            desktop_environment: first_non_empty(&self.env, DESKTOP_VARS),
            window_manager: first_non_empty(&self.env, WM_VARS),
        }
    }

    fn session_type(&self) -> SessionType {
        if first_non_empty(&self.env, WAYLAND_VARS).is_resolved() {
            SessionType::Wayland
        } else if first_non_empty(&self.env, X11_VARS).is_resolved() {
            SessionType::X11
        } else {
            SessionType::Unknown
        }
    }
}
