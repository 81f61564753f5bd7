use crate::ComparisonTally;

/// Quicksort with Hoare partitioning and a leftmost pivot.
///
/// Counting policy: one event per pointer probe. Both partition loops bump
/// the tally on every step of `i` and `j`, including the step whose test
/// fails and exits the loop, so the total over-counts relative to a pure
/// value-comparison tally. That probe count is the observable contract of
/// this kernel; do not replace it with a comparison count.
///
/// The leftmost pivot is likewise part of the contract: already-sorted and
/// reversed inputs degrade to quadratic probe counts and must keep doing so.
pub fn sort(data: &mut [i32], tally: &mut ComparisonTally) {
    if data.len() < 2 {
        return;
    }
    quick_sort(data, 0, data.len() as isize - 1, tally);
}

fn quick_sort(data: &mut [i32], mut left: isize, mut right: isize, tally: &mut ComparisonTally) {
    // Recurse into the smaller partition and loop on the larger one, keeping
    // stack depth logarithmic even on the degenerate pivot cases. The probe
    // totals are unaffected by the visit order.
    while left < right {
        let split = partition(data, left, right, tally);
        if split - left < right - split {
            quick_sort(data, left, split - 1, tally);
            left = split + 1;
        } else {
            quick_sort(data, split + 1, right, tally);
            right = split - 1;
        }
    }
}

fn partition(data: &mut [i32], left: isize, right: isize, tally: &mut ComparisonTally) -> isize {
    let pivot = data[left as usize];
    let mut i = left;
    let mut j = right + 1;

    loop {
        // Each probe advances the pointer first and is tallied before the
        // test, matching the do-while shape of the reference partition.
        loop {
            i += 1;
            tally.bump();
            if !(i <= right && data[i as usize] < pivot) {
                break;
            }
        }
        loop {
            j -= 1;
            tally.bump();
            if !(j >= left && data[j as usize] > pivot) {
                break;
            }
        }
        if i >= j {
            break;
        }
        data.swap(i as usize, j as usize);
    }

    data.swap(left as usize, j as usize);
    j
}
