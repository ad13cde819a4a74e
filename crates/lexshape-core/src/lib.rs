pub mod entry;
pub mod error;
pub mod format;
pub mod io;
pub mod transform;

pub use entry::{Entry, derive_word_key, parse_entries};
pub use error::{Result, TransformError};
pub use io::{TransformSummary, load_entries, transform, write_output};
pub use transform::{Reshaped, Transformer};

pub use lexshape_types::{OutputMode, WordRecord};
