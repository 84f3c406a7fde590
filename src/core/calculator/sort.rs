//! Iterative bottom-up merge sort.
//!
//! The input is treated as runs of width 1. Each pass merges neighbouring
//! runs into runs of twice the width, until one run covers everything.

/// Return a sorted copy of `items`. The input slice is left untouched.
///
/// The sort is stable: on equal keys the element from the left run is taken
/// first.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let n = items.len();
    let mut current = items.to_vec();
    if n <= 1 {
        return current;
    }

    let mut next = Vec::with_capacity(n);
    let mut width = 1;

    while width < n {
        let mut i = 0;
        while i < n {
            let mid = (i + width).min(n);
            let hi = (i + 2 * width).min(n);

            if mid < hi {
                merge_into(&current[i..mid], &current[mid..hi], &mut next);
            } else {
                // no right partner in this pass: carry the run over as is
                next.extend_from_slice(&current[i..mid]);
            }
            i += 2 * width;
        }

        std::mem::swap(&mut current, &mut next);
        next.clear();
        width *= 2;
    }

    current
}

/// Two-pointer merge of two sorted runs, appended to `out`.
fn merge_into<T: Ord + Clone>(left: &[T], right: &[T], out: &mut Vec<T>) {
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}
