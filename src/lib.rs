mod error;
mod heuristics;
mod normalize;
mod os_detector;
mod os_info;
mod platform;
mod types;
mod update;

pub use error::{Error, Result};
pub use normalize::{normalize_os, NtVersionTable};
pub use os_detector::OsDetector;
pub use os_info::os_name;
pub use platform::get_platform;
pub use types::*;
