//! Command implementations.

mod check;
mod devices;
mod show;

pub use check::check_execute;
pub use devices::{devices_execute, render_device_list};
pub use show::show_execute;
