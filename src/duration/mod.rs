mod clock;
mod formatter;
mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use formatter::{HumanDurationFormatter, WordsDurationFormatter};
pub use tracker::DurationTracker;
