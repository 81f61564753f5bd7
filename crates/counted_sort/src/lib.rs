mod kernels;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    CombSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 6] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::CombSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::CombSort => "comb_sort",
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::QuickSort => "quick_sort",
    }
}

pub fn display_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "Bubble Sort",
        SortAlgorithm::CombSort => "Comb Sort",
        SortAlgorithm::SelectionSort => "Selection Sort",
        SortAlgorithm::InsertionSort => "Insertion Sort",
        SortAlgorithm::MergeSort => "Merge Sort",
        SortAlgorithm::QuickSort => "Quick Sort",
    }
}

/// Per-run comparison counter. Each kernel defines its own counting event
/// (see the kernel modules); the tally is bumped exactly once per event.
///
/// 64-bit on purpose: the quadratic kernels and quicksort's probe counting
/// grow as n^2 in the worst case, and the tally must stay exact well past
/// the 10,000-element runs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ComparisonTally {
    comparisons: u64,
}

impl ComparisonTally {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        self.comparisons += 1;
    }

    pub fn count(&self) -> u64 {
        self.comparisons
    }
}

/// Result of one counted sort run: the sorted values, the tally, and the
/// original length. Immutable once produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortOutcome {
    pub values: Vec<i32>,
    pub comparisons: u64,
    pub len: usize,
}

/// Sorts `data` in place with the chosen kernel and returns the number of
/// comparison events the kernel performed. The count is deterministic given
/// the kernel and the exact input sequence (not just its multiset: tie
/// handling and probe order depend on initial positions).
pub fn sort_i32(algo: SortAlgorithm, data: &mut [i32]) -> u64 {
    let mut tally = ComparisonTally::new();
    match algo {
        SortAlgorithm::BubbleSort => kernels::bubble_sort::sort(data, &mut tally),
        SortAlgorithm::CombSort => kernels::comb_sort::sort(data, &mut tally),
        SortAlgorithm::SelectionSort => kernels::selection_sort::sort(data, &mut tally),
        SortAlgorithm::InsertionSort => kernels::insertion_sort::sort(data, &mut tally),
        SortAlgorithm::MergeSort => kernels::merge_sort::sort(data, &mut tally),
        SortAlgorithm::QuickSort => kernels::quick_sort::sort(data, &mut tally),
    }
    tally.count()
}

pub fn sort_i32_outcome(algo: SortAlgorithm, mut values: Vec<i32>) -> SortOutcome {
    let len = values.len();
    let comparisons = sort_i32(algo, &mut values);
    SortOutcome {
        values,
        comparisons,
        len,
    }
}
