//! Data models
//!
//! Session state and the records it holds.

mod conversion_record;
mod session;

pub use conversion_record::{ConversionRecord, ConversionRecordCreate};
pub use session::Session;
