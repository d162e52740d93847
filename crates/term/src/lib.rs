//! Terminal rendering for blockfall.
//!
//! The renderer owns the terminal (raw mode, alternate screen); the view
//! is pure and maps simulation state into a framebuffer.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{FieldView, Viewport};
