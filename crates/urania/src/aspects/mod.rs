pub mod normalizer;
pub mod types;

pub use normalizer::normalize_aspects;
pub use types::{Aspect, AspectKind, Orb, OrbDirection};
