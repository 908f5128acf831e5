//! Run with:
//!
//! ```sh
//! cargo bench -q --bench overhead
//! ```

use divan::Bencher;

fn main() {
    divan::main();
}

mod barrier {
    use super::*;

    #[divan::bench]
    fn by_value() -> u64 {
        clobber::do_not_optimize(0xdead_beef_u64)
    }

    #[divan::bench]
    fn by_mut() {
        let mut value = 0xdead_beef_u64;
        clobber::do_not_optimize_mut(&mut value);
    }

    // Baseline: the standard library's equivalent.
    #[divan::bench]
    fn std_black_box() -> u64 {
        std::hint::black_box(0xdead_beef_u64)
    }
}

mod fence {
    #[divan::bench]
    fn clobber_memory() {
        clobber::clobber_memory();
    }

    #[divan::bench]
    fn full_fence() {
        clobber::full_fence();
    }
}

mod summed_loop {
    use super::*;

    fn sum_of_squares(n: u64) -> u64 {
        (0..n).map(|i| i * i).sum()
    }

    #[divan::bench]
    fn barriered(bencher: Bencher) {
        let n = fastrand::u64(64..128);

        bencher.bench(|| clobber::do_not_optimize(sum_of_squares(clobber::do_not_optimize(n))));
    }

    #[divan::bench]
    fn unbarriered(bencher: Bencher) {
        let n = fastrand::u64(64..128);

        // Kept alive only by the harness observing the return value.
        bencher.bench(|| sum_of_squares(n));
    }
}
