//! Standalone application wrapper.
//!
//! [`ValentineApp`] wraps a [`ValentinePanel`](super::ValentinePanel) and
//! implements [`eframe::App`] so the panel can run as a native window.

use eframe::egui;

use crate::config::ValentineConfig;

use super::ValentinePanel;

/// Top-level eframe application: a thin shell around [`ValentinePanel`].
pub struct ValentineApp {
    /// The inner panel that owns all data and UI state.
    pub panel: ValentinePanel,
}

impl ValentineApp {
    /// Create the application from a configuration.
    pub fn new(cfg: &ValentineConfig) -> Self {
        Self {
            panel: ValentinePanel::new(cfg),
        }
    }
}

impl eframe::App for ValentineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.panel.update(ctx);
    }
}
