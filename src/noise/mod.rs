//! Random offset generation for terrain synthesis.
//!
//! Midpoint displacement perturbs every interior point with a signed
//! offset whose magnitude decays geometrically with recursion depth.

mod offset;

pub use offset::{ChaChaOffsets, OffsetConfig, OffsetSource, ZeroOffsets};
