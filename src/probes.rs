//! Probe symbols whose generated code is meant to be inspected.
//!
//! The barrier contract is about code generation, not program output, so it
//! cannot be checked by a black-box test. These `#[no_mangle]` functions
//! give a disassembler stable symbols to compare:
//!
//! ```sh
//! cargo rustc --release --features codegen_probes -- --emit asm
//! ```
//!
//! [`clobber_probe_observed_loop`] must retain its loop at any optimization
//! level, while [`clobber_probe_discarded_loop`] is identical except that
//! nothing observes its result, so the optimizer is free to delete the loop
//! entirely.

use crate::{clobber_memory, do_not_optimize};

// Inlined into each probe so the loop appears inside the probe's symbol.
#[inline(always)]
fn sum_of_squares(n: u32) -> u32 {
    let mut acc = 0u32;
    for i in 0..n {
        acc = acc.wrapping_add(i.wrapping_mul(i));
    }
    acc
}

/// Computes a pure arithmetic loop and marks the result as used.
#[no_mangle]
pub fn clobber_probe_observed_loop(n: u32) {
    do_not_optimize(sum_of_squares(n));
}

/// Computes the same loop as [`clobber_probe_observed_loop`] and discards
/// the result.
#[no_mangle]
pub fn clobber_probe_discarded_loop(n: u32) {
    let _ = sum_of_squares(n);
}

/// Performs two stores to `slot` separated by [`clobber_memory`].
///
/// Without the fence the first store is dead and may be elided; with it,
/// both stores must appear in the generated code.
#[no_mangle]
pub fn clobber_probe_fenced_stores(slot: &mut u64) {
    *slot = 1;
    clobber_memory();
    *slot = 2;
}
