//! Shared helpers for the collectors

pub mod command;
pub mod edid;
pub mod file;
pub mod parsing;
