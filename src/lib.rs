//! Valentine crate root: re-exports and module wiring.
//!
//! A single-window novelty application built on egui/eframe: an animated
//! heart-shaped parametric curve, plus a "Start" button that opens a
//! yes/no dialog with escalating prompts on repeated "No" answers.
//!
//! Module layout:
//! - `curve`: the heart function, sample grid, and phase schedule (pure)
//! - `animation`: the tick-paced driver owning the displayed curve state
//! - `dialog`: the question dialog's finite-state core (pure)
//! - `dialog_ui`: egui window rendering for open dialogs
//! - `config`: fixed-constant configuration with a `Default`
//! - `app`: panel, eframe wrapper, and the `run_valentine` entry point

mod app;

pub mod animation;
pub mod config;
pub mod curve;
pub mod dialog;
pub mod dialog_ui;

// Public re-exports for a compact external API
pub use animation::AnimationDriver;
pub use app::{run_valentine, ValentineApp, ValentinePanel};
pub use config::ValentineConfig;
pub use curve::{heart_curve, phase_schedule, sample_grid};
pub use dialog::{DialogState, Resolution};
pub use dialog_ui::DialogWindow;
