//! Pure text analyzers run on the content of each discovered feature file.
//!
//! Neither analyzer touches the filesystem: the pipeline reads the file and
//! hands the text over, which keeps both testable in isolation from I/O.

pub mod features;
pub mod indentation;
mod lines;

pub use features::{classify_line, parse_features, FieldUpdate, ParseOptions};
pub use indentation::{check_indentation, leading_whitespace};
pub use lines::{split_lf, split_normalized};
