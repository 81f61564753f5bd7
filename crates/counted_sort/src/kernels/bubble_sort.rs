use crate::ComparisonTally;

/// Self-terminating bubble sort over a shrinking prefix.
///
/// Counting policy: one event per adjacent pair inspected, whether or not
/// the pair is swapped. A pass with zero swaps ends the sort, so an already
/// sorted input costs exactly `n - 1` events and a reversed one
/// `n * (n - 1) / 2`.
pub fn sort(data: &mut [i32], tally: &mut ComparisonTally) {
    let mut count = data.len();
    let mut swapped = true;

    while swapped {
        swapped = false;
        // The last element of each pass lands in final position, so the
        // scanned prefix shrinks by one per pass.
        for j in 1..count {
            tally.bump();
            if data[j] < data[j - 1] {
                data.swap(j - 1, j);
                swapped = true;
            }
        }
        count = count.saturating_sub(1);
    }
}
