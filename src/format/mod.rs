//! Console line rendering: the fixed color palette and the line formatter.

pub mod line;
pub mod palette;

pub use line::render_line;
