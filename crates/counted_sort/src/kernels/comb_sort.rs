use crate::ComparisonTally;

const SHRINK_FACTOR: f64 = 1.3;

/// Comb sort with the classic 1.3 shrink factor.
///
/// Counting policy: one event per `(i, i + gap)` pair visited. The gap
/// update floors a binary double division, which is not the same as the
/// rational `gap * 10 / 13` (e.g. 13 / 1.3 floors to 9 in f64); the double
/// form is the reference behavior and keeps reported counts reproducible.
pub fn sort(data: &mut [i32], tally: &mut ComparisonTally) {
    let len = data.len();
    let mut gap = len;
    let mut swapped = true;

    while swapped || gap > 1 {
        gap = ((gap as f64 / SHRINK_FACTOR) as usize).max(1);
        swapped = false;

        let mut i = 0;
        while i + gap < len {
            tally.bump();
            if data[i] > data[i + gap] {
                data.swap(i, i + gap);
                swapped = true;
            }
            i += 1;
        }
    }
}
