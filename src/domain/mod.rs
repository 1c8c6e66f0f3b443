pub mod record;
pub mod status;

pub use record::{LogEntry, RecordSource, VehicleRecord};
pub use status::{classify, classify_fine, is_received_advance, StatusClass};
