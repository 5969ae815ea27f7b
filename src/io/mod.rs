//! Report output: the table writer, the row streamer, and the alternate
//! tabular loader.

pub mod loader;
pub mod report;
pub mod writer;

pub use loader::{load_and_adjust, AssocFileSpec};
pub use report::ReportInput;
pub use writer::TableWriter;
