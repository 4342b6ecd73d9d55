//! 1031 like-kind exchange calculations: deadlines, gain and recapture,
//! boot, replacement requirements and identification rules.
//!
//! Every calculation is a pure function of its inputs. The reference instant
//! for deadline countdowns is always passed in by the caller.

pub mod core;

pub use crate::core::*;
