pub mod clock;
pub mod config;
pub mod error;
pub mod id;
pub mod result;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use error::TaskBoardError;
pub use id::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use result::TaskBoardResult;
