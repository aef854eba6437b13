//! Result accumulation and disposal.

mod record;
mod result_writer;
mod tool;

pub use record::FileRecord;
pub use result_writer::ResultWriter;
pub use tool::ToolInfo;
