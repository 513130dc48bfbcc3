// App module for worldcup-tui
// Handles application state and input handling

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, PanelFocus};
