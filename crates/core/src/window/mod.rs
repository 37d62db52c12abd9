mod boundaries;
mod clock;
mod cursor;
mod error;
mod presets;
mod query;

pub use boundaries::{end_of_day, parse_date, shift_days, start_of_day, whole_days_between};
pub use clock::{parse_timestamp, parse_timezone, Clock, FixedClock, SystemClock};
pub use cursor::{TimeRangeCursor, MAX_DAYS};
pub use error::{Result, WindowError};
pub use presets::{RangePreset, DEFAULT_DAYS};
pub use query::{ChartWindow, PickerRange, RangeQuery};
