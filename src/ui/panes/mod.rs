//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`expression`]: The rendered expression, with the selected operator and
//!   its operands highlighted
//! - [`blocks`]: Every block with its kind, description and operand ranges
//! - [`status`]: Status bar with keybindings and the current rendering
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area and the state it displays.

pub mod blocks;
pub mod expression;
pub mod status;

// Re-export render functions for convenience
pub use blocks::render_block_pane;
pub use expression::{block_style, render_expression_pane};
pub use status::render_status_bar;
