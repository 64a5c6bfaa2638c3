//! egui window rendering for the question dialog.

use std::sync::atomic::{AtomicU64, Ordering};

use eframe::egui;

use crate::dialog::DialogState;

/// Global monotonic counter assigning unique IDs to [`DialogWindow`]s.
///
/// Several dialogs can be open at once; the ID namespaces each window's
/// egui ID so they never collide even when their titles match.
static DIALOG_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One open question dialog: the state machine plus its window identity.
pub struct DialogWindow {
    id: u64,
    state: DialogState,
}

impl DialogWindow {
    /// Open a fresh dialog with its own independent state.
    pub fn new() -> Self {
        Self {
            id: DIALOG_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            state: DialogState::new(),
        }
    }

    /// Unique window ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current dialog state.
    pub fn state(&self) -> &DialogState {
        &self.state
    }

    /// Render the dialog window for this frame. Returns `false` once the
    /// dialog should be discarded: the closing message was acknowledged,
    /// or the window was closed from its title bar.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let mut acknowledged = false;
        egui::Window::new(self.state.title())
            .id(egui::Id::new(("valentine_dialog", self.id)))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(self.state.prompt());
                ui.separator();
                ui.horizontal(|ui| {
                    if self.state.is_resolved() {
                        if ui.button("OK").clicked() {
                            acknowledged = true;
                        }
                    } else {
                        if ui.button("Yes").clicked() {
                            self.state.press_yes();
                        }
                        if ui.button("No").clicked() {
                            self.state.press_no();
                        }
                    }
                });
            });
        open && !acknowledged
    }
}

impl Default for DialogWindow {
    fn default() -> Self {
        Self::new()
    }
}
