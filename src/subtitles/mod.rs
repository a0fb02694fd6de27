mod parser;
mod types;
mod utils;
mod writer;

pub use parser::{count_blocks, parse_srt};
pub use types::Segment;
pub use utils::{format_timestamp, parse_timestamp};
pub use writer::segments_to_srt;
