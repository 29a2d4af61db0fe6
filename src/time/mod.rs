pub mod clock;
pub mod weekdays;
pub mod window;

pub use clock::TimeOfDay;
pub use weekdays::{parse_weekday, WeekdaySet};
pub use window::{OvernightDayRule, TimeWindow};
