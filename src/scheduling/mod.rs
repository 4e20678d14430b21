pub mod overlap;
pub mod time;

pub use overlap::{overlaps, ShiftInterval};
pub use time::{TimeOfDay, TimeParseError};
