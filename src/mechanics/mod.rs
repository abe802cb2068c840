pub mod clamp;
pub mod stoch;

pub use clamp::*;
