pub mod strength_source;

pub use strength_source::{NoStrengths, StrengthSource};
