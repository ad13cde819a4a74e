pub mod types;

pub use types::{DEFAULT_DEFINITION, OutputMode, UNKNOWN_WORD, WORD_SEPARATOR, WordRecord};
