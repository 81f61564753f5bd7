mod format;
mod generator;

use counted_sort::{all_algorithms, display_name, sort_i32_outcome};
use format::ShowcaseBlock;

/// Array sizes exercised per run. The quadratic kernels take a while on the
/// largest one; that cost is part of the benchmark.
const RUN_SIZES: [usize; 4] = [10, 100, 1000, 10000];

/// The one size whose literal contents are echoed in the final summary.
const SHOWCASE_SIZE: usize = 100;

fn main() {
    let mut showcase = ShowcaseBlock::new();

    for &algo in all_algorithms() {
        println!("{}", format::algorithm_header(display_name(algo)));

        for &size in &RUN_SIZES {
            let unsorted = generator::generate(size);
            if size == SHOWCASE_SIZE {
                showcase.record_unsorted(display_name(algo), &unsorted);
            }

            let outcome = sort_i32_outcome(algo, unsorted);
            print!("{}", format::sort_report(outcome.len, outcome.comparisons));
            println!();

            if size == SHOWCASE_SIZE {
                showcase.record_sorted(&outcome.values);
            }
        }
    }

    print!("{}", showcase.into_block());
}
