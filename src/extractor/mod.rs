pub mod enum_extractor;
pub mod output_writer;
pub mod result_set;

pub use enum_extractor::EnumExtractor;
pub use output_writer::{GenerationReport, OutputWriter};
pub use result_set::{ExtractedFile, ResultSet};
