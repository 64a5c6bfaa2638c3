//! Main application module.
//!
//! The GUI wiring is split into focused sub-modules:
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`update`]        | Per-frame tick advancement, plot rendering, and dialog windows |
//! | [`valentine_app`] | Standalone [`ValentineApp`] (eframe) wrapper |
//! | [`run`]           | Top-level [`run_valentine()`] entry point and icon loading |

mod run;
mod update;
mod valentine_app;

pub use run::run_valentine;
pub use valentine_app::ValentineApp;

use std::time::Instant;

use eframe::egui;

use crate::animation::AnimationDriver;
use crate::config::ValentineConfig;
use crate::dialog_ui::DialogWindow;

/// The central widget: owns the animation driver and every open dialog.
///
/// All mutable application state lives here and is threaded through the
/// event loop explicitly; there are no globals. The eframe update, the
/// animation tick, and every button callback run on the one UI thread,
/// so mutation is always sequential.
pub struct ValentinePanel {
    /// Paces the phase schedule and holds the displayed curve.
    pub driver: AnimationDriver,

    /// Open question dialogs, each with independent state. Entries are
    /// dropped as their windows close.
    pub dialogs: Vec<DialogWindow>,

    /// Color of the curve line.
    pub line_color: egui::Color32,

    /// Width of the curve line in points.
    pub line_width: f32,
}

impl ValentinePanel {
    /// Create the panel from a configuration, with no dialogs open and
    /// the animation starting at phase 0.
    pub fn new(cfg: &ValentineConfig) -> Self {
        Self {
            driver: AnimationDriver::new(cfg.tick_interval, Instant::now()),
            dialogs: Vec::new(),
            line_color: cfg.line_color,
            line_width: cfg.line_width,
        }
    }
}
