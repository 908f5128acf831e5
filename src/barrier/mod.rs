use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(all(
        not(feature = "force_opaque"),
        not(miri),
        any(
            target_arch = "x86",
            target_arch = "x86_64",
            target_arch = "arm",
            target_arch = "aarch64",
            target_arch = "riscv32",
            target_arch = "riscv64",
            target_arch = "loongarch64",
        ),
    ))] {
        mod asm;
        use self::asm as imp;

        /// The barrier strategy compiled into this build.
        pub const STRATEGY: BarrierStrategy = BarrierStrategy::InlineAsm;
    } else {
        mod opaque;
        use self::opaque as imp;

        /// The barrier strategy compiled into this build.
        pub const STRATEGY: BarrierStrategy = BarrierStrategy::OpaqueCall;
    }
}

/// How the optimization barrier is realized for the current build target.
///
/// Exactly one strategy is selected when the crate is compiled; there is no
/// runtime dispatch. The selection is reported through [`STRATEGY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarrierStrategy {
    /// An empty inline-assembly fragment declaring the value as an operand.
    ///
    /// Compiles to zero instructions while forcing the value to be
    /// materialized in a register or memory location.
    InlineAsm,

    /// A volatile read, or a call to a function the optimizer cannot see
    /// into.
    ///
    /// Used where stable inline assembly is unavailable and under Miri. May
    /// cost a few instructions per call.
    OpaqueCall,

    /// The value passes through untouched and nothing is guaranteed.
    ///
    /// No current target selects this strategy since the opaque call is
    /// available everywhere. It exists so a port without that path degrades
    /// visibly instead of silently.
    Inert,
}

impl BarrierStrategy {
    /// Returns `true` if the strategy actually prevents dead-code
    /// elimination of computations feeding the barrier.
    #[inline]
    pub const fn is_effective(self) -> bool {
        !matches!(self, Self::Inert)
    }
}

/// Forces `value` to be treated as used, then returns it.
///
/// Computations feeding `value` cannot be proven dead and removed, even
/// when the returned value is discarded. The call has no effect on program
/// semantics and, under the inline-assembly strategy, compiles to zero
/// instructions.
///
/// # Examples
///
/// ```
/// fn sum_of_squares(n: u64) -> u64 {
///     (0..n).map(|i| i * i).sum()
/// }
///
/// // The loop inside `sum_of_squares` must survive optimization.
/// clobber::do_not_optimize(sum_of_squares(1_000));
/// ```
#[inline(always)]
pub fn do_not_optimize<T>(value: T) -> T {
    imp::hide(value)
}

/// Forces the value behind `value` to be treated as read and written.
///
/// In addition to keeping the computation that produced the value alive,
/// this prevents the compiler from assuming the value is unchanged after
/// the call. Prefer this form when the barriered variable gets reused.
#[inline(always)]
pub fn do_not_optimize_mut<T>(value: &mut T) {
    imp::hide_mut(value);
}

/// Forces the value behind `value` to be treated as read.
///
/// A pure input constraint still permits optimizations that
/// [`do_not_optimize`] and [`do_not_optimize_mut`] prevent, since the
/// compiler may assume the value is unchanged after the call.
#[deprecated(
    note = "the read-only form can permit undesired optimizations; \
            use `do_not_optimize` or `do_not_optimize_mut` instead"
)]
#[inline(always)]
pub fn do_not_optimize_ref<T>(value: &T) {
    imp::hide_ref(value);
}
