use framegap::{AnalysisResult, AppError, FrameSet, GapRange, find_missing_ranges};
use serde_json::json;

fn g(start: u64, end: u64) -> GapRange {
    GapRange::new(start, end)
}

fn covered(result: &AnalysisResult) -> u64 {
    result.missing_gaps.iter().map(GapRange::size).sum()
}

/// Deterministic shuffle (LCG-driven Fisher–Yates)
fn shuffled(mut v: Vec<i64>, seed: u32) -> Vec<i64> {
    let mut s = seed;
    for i in (1..v.len()).rev() {
        s = s.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let j = (s as usize) % (i + 1);
        v.swap(i, j);
    }
    v
}

#[test]
fn test_result_does_not_depend_on_input_order() {
    let frames: Vec<i64> = vec![2, 3, 7, 8, 9, 15, 16, 40, 41, 42, 43, 100];
    let expected = find_missing_ranges(&frames).unwrap();

    for seed in [1, 7, 42, 1234, 99_999] {
        let permuted = shuffled(frames.clone(), seed);
        assert_eq!(find_missing_ranges(&permuted).unwrap(), expected);
    }

    let mut reversed = frames.clone();
    reversed.reverse();
    assert_eq!(find_missing_ranges(&reversed).unwrap(), expected);
}

#[test]
fn test_missing_frames_equals_sum_of_gap_sizes() {
    let inputs: Vec<Vec<i64>> = vec![
        vec![7],
        vec![3, 4, 5],
        vec![1, 5, 6, 10],
        vec![10, 20, 30, 31, 33, 1000],
        (1..200).filter(|n| n % 3 != 0).collect(),
    ];

    for frames in inputs {
        let r = find_missing_ranges(&frames).unwrap();
        assert_eq!(r.missing_frames, covered(&r), "frames: {frames:?}");

        // everything up to the highest frame is either received or missing
        let max = *frames.iter().max().unwrap() as u64;
        assert_eq!(r.missing_frames + frames.len() as u64, max);
    }
}

#[test]
fn test_empty_input_gives_empty_result() {
    let r = find_missing_ranges(&[]).unwrap();
    assert_eq!(r.missing_frames, 0);
    assert!(r.missing_gaps.is_empty());
    assert_eq!(r.longest_gap_range, None);
    assert_eq!(r.longest_gap_size, 0);
}

#[test]
fn test_contiguous_input_has_no_gaps() {
    assert_eq!(
        find_missing_ranges(&[1, 2, 3, 4]).unwrap(),
        AnalysisResult::default()
    );
}

#[test]
fn test_leading_gap() {
    let r = find_missing_ranges(&[3, 4, 5]).unwrap();
    assert_eq!(
        r,
        AnalysisResult {
            missing_frames: 2,
            missing_gaps: vec![g(1, 2)],
            longest_gap_range: Some(g(1, 2)),
            longest_gap_size: 2,
        }
    );
}

#[test]
fn test_internal_gaps_and_tie_break() {
    let r = find_missing_ranges(&[1, 5, 6, 10]).unwrap();
    assert_eq!(
        r,
        AnalysisResult {
            missing_frames: 6,
            missing_gaps: vec![g(2, 4), g(7, 9)],
            longest_gap_range: Some(g(2, 4)),
            longest_gap_size: 3,
        }
    );
}

#[test]
fn test_single_element() {
    let r = find_missing_ranges(&[7]).unwrap();
    assert_eq!(r.missing_gaps, vec![g(1, 6)]);
    assert_eq!(r.missing_frames, 6);
    assert_eq!(r.longest_gap_range, Some(g(1, 6)));
    assert_eq!(r.longest_gap_size, 6);
}

#[test]
fn test_gaps_are_ordered_and_never_touch() {
    let r = find_missing_ranges(&[50, 2, 30, 31, 9, 4]).unwrap();
    assert_eq!(
        r.missing_gaps,
        vec![g(1, 1), g(3, 3), g(5, 8), g(10, 29), g(32, 49)]
    );
    for pair in r.missing_gaps.windows(2) {
        assert!(pair[0].end + 1 < pair[1].start);
    }
    assert_eq!(r.longest_gap_range, Some(g(10, 29)));
}

#[test]
fn test_shape_errors_for_non_sequences() {
    for value in [json!("abc"), json!({"a": 1}), json!(3)] {
        let err = FrameSet::from_json_value(&value).unwrap_err();
        assert!(matches!(err, AppError::Shape(_)), "{value} gave {err:?}");
    }
}

#[test]
fn test_element_errors_for_invalid_values() {
    assert!(matches!(
        find_missing_ranges(&[1, -2, 3]).unwrap_err(),
        AppError::Element { index: 1, .. }
    ));
    assert!(matches!(
        find_missing_ranges(&[1, 0]).unwrap_err(),
        AppError::Element { index: 1, .. }
    ));

    // non-integers never reach the analyzer as i64, they fail while loading
    let err = FrameSet::from_json_value(&json!([1, 2.5])).unwrap_err();
    assert!(matches!(err, AppError::Element { index: 1, .. }));

    // a loaded set with a negative frame fails in the analyzer
    let fs = FrameSet::from_json_value(&json!([1, -2, 3])).unwrap();
    assert!(matches!(fs.analyze(), Err(AppError::Element { .. })));
}

#[test]
fn test_caller_input_is_not_modified() {
    let frames = vec![9, 3, 1, 7];
    let snapshot = frames.clone();

    let r = find_missing_ranges(&frames).unwrap();
    assert_eq!(frames, snapshot);
    assert_eq!(r.missing_gaps, vec![g(2, 2), g(4, 6), g(8, 8)]);

    let fs = FrameSet::new(frames);
    fs.analyze().unwrap();
    assert_eq!(fs.as_slice(), snapshot.as_slice());
}

#[test]
fn test_concurrent_calls_are_independent() {
    let handles: Vec<_> = (1..=8i64)
        .map(|k| {
            std::thread::spawn(move || {
                let frames: Vec<i64> = (1..=1_000).map(|n| n * k).collect();
                find_missing_ranges(&frames).unwrap()
            })
        })
        .collect();

    for (k, h) in (1..=8u64).zip(handles) {
        let r = h.join().unwrap();
        assert_eq!(r.missing_frames, 1_000 * k - 1_000);
    }
}

#[test]
fn test_large_input_in_reverse_order() {
    let frames: Vec<i64> = (1..=100_000).rev().filter(|n| n % 1_000 != 0).collect();
    let r = find_missing_ranges(&frames).unwrap();

    // multiples of 1000 are dropped; 100000 lies past the last received
    // frame (99999) so it is not counted
    assert_eq!(r.gap_count(), 99);
    assert_eq!(r.missing_frames, 99);
    assert_eq!(r.longest_gap_range, Some(g(1_000, 1_000)));
}
