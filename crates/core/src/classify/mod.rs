pub mod display;
pub mod input;
pub mod predicates;
pub mod process;
pub mod types;

pub use display::generate_alternating_caps_string;
pub use input::parse_tokens;
pub use predicates::{classify_token, is_alphabetic, is_number, is_special};
pub use process::classify;
pub use types::{Classification, ClassificationResult, ClassifyError};
