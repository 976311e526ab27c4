pub mod config;
pub mod model;
pub mod read;
pub mod render;
pub mod verify;

pub use config::{Marker, MarkerCheck, UsageHint, VerifierConfig};
pub use model::{
    ContentCheck, FileCheck, FileStatus, MarkerResult, ReadFailure, VerificationOutcome,
    VerificationReport, REPORT_VERSION,
};
pub use read::{entry_size, inspect, read_document, ReadError};
pub use render::{format_thousands, render_footer, render_header, render_report};
pub use verify::verify;
