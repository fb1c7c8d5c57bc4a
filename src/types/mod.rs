mod browser;
mod detection;
mod section;
mod user_agent;

pub use browser::*;
pub use detection::*;
pub use section::*;
pub use user_agent::*;
