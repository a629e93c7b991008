//! Tests for the ROI model
//!
//! Tests are organized by topic:
//! - `evaluate` - ROI arithmetic, zero-cost and payback clamp edge cases
//! - `sweep` - Lever sampling, ordering and determinism
//! - `export` - CSV field map export

mod export;
mod sweep;
