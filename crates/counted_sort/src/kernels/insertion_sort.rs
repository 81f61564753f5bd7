use crate::ComparisonTally;

/// Insertion sort.
///
/// Counting policy: one event per backward-walk iteration entered. The walk
/// stops at the first predecessor that does not exceed the key, and that
/// final probe is counted too. Sorted input costs `n - 1`, reversed input
/// `n * (n - 1) / 2`.
pub fn sort(data: &mut [i32], tally: &mut ComparisonTally) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            tally.bump();
            if data[j - 1] > key {
                data[j] = data[j - 1];
                j -= 1;
            } else {
                break;
            }
        }
        data[j] = key;
    }
}
