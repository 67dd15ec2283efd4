//! Services module

mod record_service;

pub use record_service::{encode_uri_component, RecordService};
