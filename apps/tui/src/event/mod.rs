// Event module for worldcup-tui
// Main draw/poll loop plus the headless report mode

pub mod loop_handler;

pub use loop_handler::{run, run_headless};
