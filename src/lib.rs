pub mod types;
pub mod error;
pub mod time;
pub mod config;

pub use types::*;
pub use error::{Result, WindowError};
pub use time::{OvernightDayRule, TimeOfDay, TimeWindow, WeekdaySet};
