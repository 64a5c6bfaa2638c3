//! Configuration for the valentine application.
//!
//! There is no file- or environment-based configuration: everything is a
//! fixed constant with a [`Default`], overridable only in code by callers
//! embedding the crate.

use std::time::Duration;

use eframe::egui;

/// Top-level configuration for the valentine window.
#[derive(Clone)]
pub struct ValentineConfig {
    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Animation ────────────────────────────────────────────────────────────
    /// Target wall-clock interval between animation ticks (best-effort).
    pub tick_interval: Duration,

    // ── Curve appearance ─────────────────────────────────────────────────────
    /// Color of the curve line.
    pub line_color: egui::Color32,
    /// Width of the curve line in points.
    pub line_width: f32,
}

impl Default for ValentineConfig {
    fn default() -> Self {
        Self {
            title: "Valentine Heart Animation".to_string(),
            native_options: None,
            tick_interval: Duration::from_millis(10),
            line_color: egui::Color32::RED,
            line_width: 2.0,
        }
    }
}
