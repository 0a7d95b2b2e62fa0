pub mod engine;
pub mod utils;

pub use engine::{DEFAULT_CUTOFF, Resolution, ResolutionMap, ResolverConfig, ResolverEngine};
pub use utils::normalize_text;
