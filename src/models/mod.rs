pub mod mode;
pub mod outcome;
pub mod request;

pub use mode::{Mode, ModeInfo};
pub use outcome::{Outcome, FAILURE_MESSAGE};
pub use request::{ApiStatus, ParaphraseRequest, ParaphraseResponse};
