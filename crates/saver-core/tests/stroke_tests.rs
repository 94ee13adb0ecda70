use glam::Vec2;
use saver_core::constants::*;
use saver_core::RibbonField;

fn make_field() -> RibbonField {
    RibbonField::new(Vec2::new(1280.0, 720.0), 42)
}

#[test]
fn no_strokes_before_first_advance() {
    let field = make_field();
    assert!(field.strokes(0.0).is_empty(), "empty trails cannot be stroked");
}

#[test]
fn stroke_count_grows_with_trail_then_saturates() {
    let mut field = make_field();
    for frame in 1..=RIBBON_WIDTH {
        field.advance();
        let strokes = field.strokes(0.0);
        assert_eq!(
            strokes.len(),
            GROUP_COUNT * frame,
            "one stroke per group per filled depth"
        );
    }
    for _ in 0..20 {
        field.advance();
        assert_eq!(field.strokes(0.0).len(), GROUP_COUNT * RIBBON_WIDTH);
    }
}

#[test]
fn strokes_are_ordered_oldest_first_with_fading_alpha() {
    let mut field = make_field();
    for _ in 0..RIBBON_WIDTH {
        field.advance();
    }
    let strokes = field.strokes(0.0);
    // Group-major: RIBBON_WIDTH strokes per group, depth descending.
    for g in 0..GROUP_COUNT {
        let per_group = &strokes[g * RIBBON_WIDTH..(g + 1) * RIBBON_WIDTH];
        for (k, stroke) in per_group.iter().enumerate() {
            let depth = RIBBON_WIDTH - 1 - k;
            let expected = (1.0 - depth as f32 / RIBBON_WIDTH as f32) * TRAIL_MAX_OPACITY;
            assert!(
                (stroke.alpha - expected).abs() < 1e-5,
                "alpha at depth {depth} was {}, expected {expected}",
                stroke.alpha
            );
        }
        let oldest = per_group.first().unwrap();
        let newest = per_group.last().unwrap();
        assert!(oldest.alpha < newest.alpha, "older slices must be fainter");
        assert!(
            (newest.alpha - TRAIL_MAX_OPACITY).abs() < 1e-5,
            "newest slice carries the peak opacity"
        );
    }
}

#[test]
fn hue_is_normalized_and_steps_with_depth() {
    let mut field = make_field();
    for _ in 0..RIBBON_WIDTH {
        field.advance();
    }
    let strokes = field.strokes(0.0);
    for stroke in &strokes {
        assert!(
            (0.0..360.0).contains(&stroke.hue),
            "hue must stay in [0, 360): {}",
            stroke.hue
        );
    }
    for g in 0..GROUP_COUNT {
        let base = field.groups[g].base_hue;
        let per_group = &strokes[g * RIBBON_WIDTH..(g + 1) * RIBBON_WIDTH];
        for (k, stroke) in per_group.iter().enumerate() {
            let depth = (RIBBON_WIDTH - 1 - k) as f32;
            let expected = (base - depth * HUE_DEPTH_STEP).rem_euclid(360.0);
            assert!(
                (stroke.hue - expected).abs() < 1e-3,
                "hue at depth {depth} was {}, expected {expected}",
                stroke.hue
            );
        }
    }
}

#[test]
fn hue_drifts_one_degree_per_divisor() {
    let mut field = make_field();
    field.advance();
    let before = field.strokes(0.0);
    let after = field.strokes(HUE_DRIFT_DIVISOR_MS);
    for (a, b) in before.iter().zip(&after) {
        let gap = (b.hue - a.hue).rem_euclid(360.0);
        assert!((gap - 1.0).abs() < 1e-3, "expected 1 degree of drift, got {gap}");
    }
}

#[test]
fn stroke_geometry_closes_through_midpoints() {
    let mut field = make_field();
    field.advance();
    let strokes = field.strokes(0.0);
    assert_eq!(strokes.len(), GROUP_COUNT);

    for (g, stroke) in strokes.iter().enumerate() {
        let pts: Vec<Vec2> = field.groups[g]
            .points
            .iter()
            .map(|p| *p.trail.front().unwrap())
            .collect();
        assert_eq!(stroke.start, pts[0], "path starts at the first point");
        assert_eq!(
            stroke.segments.len(),
            NUM_POINTS - 1,
            "one quadratic segment per successive point pair"
        );
        for (j, seg) in stroke.segments.iter().enumerate() {
            let p1 = pts[j + 1];
            let p2 = pts[(j + 2) % NUM_POINTS];
            assert_eq!(seg.ctrl, p1, "pair's first point is the control point");
            assert_eq!(seg.end, (p1 + p2) * 0.5, "segment ends at the pair midpoint");
        }
    }
}
