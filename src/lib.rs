pub mod app_state;
pub mod commands;
pub mod display;
pub mod logging;
pub mod repl;

pub use display::{render_frame, time_blocks};
