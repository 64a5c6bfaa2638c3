//! Per-frame update logic for [`ValentinePanel`].

use std::time::Instant;

use eframe::egui;
use egui_phosphor::regular::HEART;
use egui_plot::{Line, Plot};

use crate::curve::{X_MAX, X_MIN, Y_MAX, Y_MIN};
use crate::dialog_ui::DialogWindow;

use super::ValentinePanel;

impl ValentinePanel {
    /// Main per-frame update: advance the animation, render the window
    /// contents, and show every open dialog.
    ///
    /// Called by [`ValentineApp::update`](super::ValentineApp) each frame.
    pub fn update(&mut self, ctx: &egui::Context) {
        self.driver.tick(Instant::now());

        self.render_start_bar(ctx);
        self.render_curve_panel(ctx);
        self.show_dialogs(ctx);

        // Keep the animation running by asking for the next frame one
        // tick from now; the event loop stays in control in between.
        ctx.request_repaint_after(self.driver.interval());
    }

    /// Bottom bar holding the single "Start" button. Every click opens
    /// one more dialog instance.
    fn render_start_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("start_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if ui.button(format!("{HEART} Start")).clicked() {
                    self.dialogs.push(DialogWindow::new());
                }
            });
        });
    }

    /// Central plot area showing the animated curve with fixed bounds
    /// and no axis decorations.
    fn render_curve_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let line = Line::new("heart", self.driver.points())
                .color(self.line_color)
                .width(self.line_width);
            Plot::new("heart_plot")
                .show_axes([false, false])
                .show_grid([false, false])
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_drag(false)
                .allow_boxed_zoom(false)
                .show(ui, |plot_ui| {
                    // Re-assert the fixed view every frame so nothing can
                    // drift it.
                    plot_ui.set_plot_bounds_x(X_MIN..=X_MAX);
                    plot_ui.set_plot_bounds_y(Y_MIN..=Y_MAX);
                    plot_ui.line(line);
                });
        });
    }

    /// Render all open dialogs, dropping the ones that closed this frame.
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        self.dialogs.retain_mut(|dialog| dialog.show(ctx));
    }
}
