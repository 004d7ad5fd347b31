// ScribeCheck Core Services

pub mod text_processor;
pub mod config_store;
pub mod detection;
pub mod conversion;

pub use text_processor::*;
pub use config_store::*;

pub use detection::{analyze, analyze_report, decide, extract_features, score};
pub use conversion::{convert, convert_with_rng, TextConverter};
