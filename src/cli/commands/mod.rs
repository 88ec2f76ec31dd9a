//! One file per subcommand, each returning the process exit code.

mod colors;
mod demo;
mod log;

pub use colors::cmd_colors;
pub use demo::cmd_demo;
pub use log::cmd_log;
