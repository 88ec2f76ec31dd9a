//! Line rendering is split between the color palette and the header annotations
//! (timestamp and call site) that follow each channel's prefix.

mod color;
mod flags;
mod header;

pub use color::{BLUE_COLOR, GREEN_COLOR, RED_COLOR, RESET_COLOR, YELLOW_COLOR, colorize};
pub use flags::Flags;
pub use header::{CallSite, render_line};
