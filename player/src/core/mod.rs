//! Pure, deterministic visualization logic.
//!
//! No I/O and no wall-clock reads; everything here is fully testable in
//! isolation. Timer scheduling lives in [`crate::controller`].

pub mod family;
pub mod generate;
pub mod playback;
pub mod types;
