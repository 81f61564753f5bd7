use crate::ComparisonTally;

/// Top-down merge sort. The split point is `len / 2`, so the left half is
/// the smaller one on odd lengths.
///
/// Counting policy: one event per head-to-head comparison while both halves
/// still have elements; ties take the left element (stable merge). Draining
/// an exhausted side is free.
pub fn sort(data: &mut [i32], tally: &mut ComparisonTally) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut scratch = vec![0; len];
    sort_range(data, &mut scratch, 0, len, tally);
}

fn sort_range(
    data: &mut [i32],
    scratch: &mut [i32],
    lo: usize,
    hi: usize,
    tally: &mut ComparisonTally,
) {
    if hi - lo < 2 {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    sort_range(data, scratch, lo, mid, tally);
    sort_range(data, scratch, mid, hi, tally);
    merge(data, scratch, lo, mid, hi, tally);
}

fn merge(
    data: &mut [i32],
    scratch: &mut [i32],
    lo: usize,
    mid: usize,
    hi: usize,
    tally: &mut ComparisonTally,
) {
    scratch[lo..hi].copy_from_slice(&data[lo..hi]);

    let mut i = lo;
    let mut j = mid;
    let mut k = lo;

    while i < mid && j < hi {
        tally.bump();
        if scratch[i] <= scratch[j] {
            data[k] = scratch[i];
            i += 1;
        } else {
            data[k] = scratch[j];
            j += 1;
        }
        k += 1;
    }

    while i < mid {
        data[k] = scratch[i];
        i += 1;
        k += 1;
    }
    while j < hi {
        data[k] = scratch[j];
        j += 1;
        k += 1;
    }
}
