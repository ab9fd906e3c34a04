use approx::assert_abs_diff_eq;
use pwl_core::{Map, PwlCurve, Segment};
use rstest::*;
use std::{fs::File, io::BufReader, path::PathBuf};

// For every (input.json, output.json) pair in `./samples/**`,
//   1. Read in the curve,
//   2. Read in the known-good segments,
//   3. Compare the segments computed at deserialization to the known-good ones.
// The comparison requires the segment ordering to be preserved.

#[rstest]
fn build_sample(#[files("tests/samples/**/input.json")] input: PathBuf) {
    let mut output = input.clone();
    output.set_file_name("output.json");

    let curve: PwlCurve =
        serde_json::from_reader(BufReader::new(File::open(input).unwrap())).unwrap();

    let reference: Map<usize, Segment> =
        serde_json::from_reader(BufReader::new(File::open(output).unwrap())).unwrap();

    let segments = curve.segments();
    assert_eq!(segments.len(), reference.len());
    for ((i1, s1), (i2, s2)) in segments.iter().zip(reference.iter()) {
        assert_eq!(i1, i2);
        assert_eq!(s1.start, s2.start);
        assert_eq!(s1.end, s2.end);
        assert_abs_diff_eq!(s1.slope, s2.slope, epsilon = 1e-9);
        assert_abs_diff_eq!(s1.intercept, s2.intercept, epsilon = 1e-9);
    }
}
