#![doc = include_str!("../README.md")]
#![no_std]
#![warn(missing_docs)]

mod barrier;
mod fence;

#[cfg(feature = "codegen_probes")]
pub mod probes;

pub use barrier::{do_not_optimize, do_not_optimize_mut, BarrierStrategy, STRATEGY};
pub use fence::{clobber_memory, full_fence};

#[allow(deprecated)]
pub use barrier::do_not_optimize_ref;
