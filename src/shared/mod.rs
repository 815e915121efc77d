pub mod clock;
pub mod errors;
pub mod time;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::AppError;
