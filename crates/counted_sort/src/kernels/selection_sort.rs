use crate::ComparisonTally;

/// Selection sort.
///
/// Counting policy: one event per inner-scan probe, regardless of whether a
/// new minimum is found. The scan shape never depends on the data, so the
/// total is exactly `n * (n - 1) / 2` for every input of length `n`.
pub fn sort(data: &mut [i32], tally: &mut ComparisonTally) {
    let len = data.len();

    for i in 0..len {
        let mut min = i;
        for j in (i + 1)..len {
            tally.bump();
            if data[j] < data[min] {
                min = j;
            }
        }
        data.swap(i, min);
    }
}
