//! Run artifacts for simloop.
//!
//! Each run directory holds two files:
//!
//! - `run_summary.json` - the [`RunSummary`] as pretty-printed JSON
//! - `events.csv` - header `key,value,timestamp`, then one row per event
//!
//! Writes overwrite existing files in place. A crash mid-write can leave a
//! partial file.

mod error;
mod summary;
mod writer;

pub use error::{ReportError, ReportResult};
pub use summary::{read_summary, RunSummary};
pub use writer::{
    generate_report, run_dir, ReportPaths, EVENTS_FILE, EVENTS_HEADER, SUMMARY_FILE,
};
