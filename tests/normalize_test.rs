use heimdall::{EMBEDDING_LEN, KEYPOINT_COUNT, KeypointSet, normalize};

/// A plausible standing skeleton in pixel coordinates (y grows downward).
fn standing_pose() -> [[f32; 3]; KEYPOINT_COUNT] {
    let mut rows = [[0.0f32; 3]; KEYPOINT_COUNT];
    // Head joints (ignored by the normalizer).
    rows[0] = [100.0, 80.0, 0.9];
    rows[1] = [104.0, 76.0, 0.9];
    rows[2] = [96.0, 76.0, 0.9];
    rows[3] = [108.0, 78.0, 0.9];
    rows[4] = [92.0, 78.0, 0.9];
    // Body joints.
    rows[5] = [110.0, 100.0, 0.9]; // left shoulder
    rows[6] = [90.0, 100.0, 0.9]; // right shoulder
    rows[7] = [115.0, 130.0, 0.9]; // left elbow
    rows[8] = [85.0, 130.0, 0.9]; // right elbow
    rows[9] = [118.0, 160.0, 0.9]; // left wrist
    rows[10] = [82.0, 160.0, 0.9]; // right wrist
    rows[11] = [108.0, 170.0, 0.9]; // left hip
    rows[12] = [92.0, 170.0, 0.9]; // right hip
    rows[13] = [107.0, 220.0, 0.9]; // left knee
    rows[14] = [93.0, 220.0, 0.9]; // right knee
    rows[15] = [106.0, 270.0, 0.9]; // left ankle
    rows[16] = [94.0, 270.0, 0.9]; // right ankle
    rows
}

fn scale_and_translate(
    rows: [[f32; 3]; KEYPOINT_COUNT],
    scale: f32,
    tx: f32,
    ty: f32,
) -> [[f32; 3]; KEYPOINT_COUNT] {
    rows.map(|[x, y, c]| [x * scale + tx, y * scale + ty, c])
}

fn max_component_diff(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

#[test]
fn normalize_is_deterministic() {
    let pose = KeypointSet::from(standing_pose());
    assert_eq!(normalize(&pose), normalize(&pose));
}

#[test]
fn invariant_under_scale_and_translation() {
    let original = normalize(&KeypointSet::from(standing_pose()));
    let moved = normalize(&KeypointSet::from(scale_and_translate(
        standing_pose(),
        2.5,
        40.0,
        -20.0,
    )));

    assert!(max_component_diff(original.as_slice(), moved.as_slice()) < 1e-4);
}

#[test]
fn invariant_on_torso_fallback_path() {
    // Knock out one hip: the shoulder/hip quartet is incomplete and the
    // normalizer falls back to the bounding box of valid points.
    let mut rows = standing_pose();
    rows[12][2] = 0.1;

    let original = normalize(&KeypointSet::from(rows));
    let moved = normalize(&KeypointSet::from(scale_and_translate(rows, 3.0, -15.0, 60.0)));

    assert!(!original.is_degenerate());
    assert!(max_component_diff(original.as_slice(), moved.as_slice()) < 1e-4);
}

#[test]
fn too_few_valid_points_yield_zero_embedding() {
    let mut rows = standing_pose();
    // Leave only three confident body joints.
    for row in rows.iter_mut().skip(8) {
        row[2] = 0.1;
    }

    let embedding = normalize(&KeypointSet::from(rows));
    assert!(embedding.is_degenerate());
    assert_eq!(embedding.as_slice(), &[0.0; EMBEDDING_LEN]);
}

#[test]
fn confidence_at_threshold_is_invalid() {
    // Validity requires confidence strictly above 0.3.
    let mut rows = standing_pose();
    for row in rows.iter_mut() {
        row[2] = 0.3;
    }
    assert!(normalize(&KeypointSet::from(rows)).is_degenerate());
}

#[test]
fn invalid_keypoints_leave_no_residue() {
    let mut with_garbage = standing_pose();
    with_garbage[9] = [9999.0, -9999.0, 0.2]; // left wrist, wild but invalid
    let mut with_other_garbage = standing_pose();
    with_other_garbage[9] = [-512.0, 77.0, 0.05];

    let a = normalize(&KeypointSet::from(with_garbage));
    let b = normalize(&KeypointSet::from(with_other_garbage));

    // Left wrist is body index 4 -> embedding slots 8 and 9.
    assert_eq!(a.as_slice()[8], 0.0);
    assert_eq!(a.as_slice()[9], 0.0);
    // The invalid coordinates must not influence the rest of the vector.
    assert_eq!(a, b);
}

#[test]
fn collapsed_torso_falls_back_to_bounding_box_scale() {
    // Hips on top of the shoulder line: torso length collapses to zero.
    let mut rows = standing_pose();
    rows[11] = [110.0, 100.0, 0.9];
    rows[12] = [90.0, 100.0, 0.9];

    let embedding = normalize(&KeypointSet::from(rows));
    assert!(!embedding.is_degenerate());
    assert!(embedding.as_slice().iter().all(|v| v.is_finite()));
}

#[test]
fn coincident_points_do_not_divide_by_zero() {
    let mut rows = [[0.0f32; 3]; KEYPOINT_COUNT];
    for row in rows.iter_mut() {
        *row = [50.0, 50.0, 0.9];
    }

    let embedding = normalize(&KeypointSet::from(rows));
    assert!(embedding.as_slice().iter().all(|v| v.is_finite()));
    // Every point sits at the center, so the vector is all zeros.
    assert!(embedding.is_degenerate());
}
