//! Stroke extraction: turns the simulated field into plain path geometry the
//! frontend can paint without knowing anything about the simulation.

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::*;
use crate::ribbon::{Group, RibbonField};

/// One quadratic curve piece of a closed ribbon outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub ctrl: Vec2,
    pub end: Vec2,
}

/// A single closed curve at one trail depth of one group, ready to stroke.
///
/// The path starts at `start`, runs through `segments` in order, and is
/// closed back to `start` with a straight line.
#[derive(Clone, Debug)]
pub struct RibbonStroke {
    pub hue: f32,
    pub alpha: f32,
    pub start: Vec2,
    pub segments: SmallVec<[QuadSegment; NUM_POINTS]>,
}

impl RibbonField {
    /// Extract every paintable stroke for the current frame, group by group,
    /// oldest trail depth first so newer slices layer on top.
    ///
    /// `elapsed_ms` is the time since activation and drives the slow hue
    /// drift. Depths not yet reached by every point's trail are skipped, so
    /// the first `RIBBON_WIDTH - 1` frames produce shorter ribbons.
    pub fn strokes(&self, elapsed_ms: f64) -> Vec<RibbonStroke> {
        let hue_drift = (elapsed_ms / HUE_DRIFT_DIVISOR_MS) as f32;
        let mut out = Vec::new();
        for group in &self.groups {
            for depth in (0..RIBBON_WIDTH).rev() {
                if let Some(stroke) = stroke_at(group, depth, hue_drift) {
                    out.push(stroke);
                }
            }
        }
        out
    }
}

fn stroke_at(group: &Group, depth: usize, hue_drift: f32) -> Option<RibbonStroke> {
    let mut at_depth: SmallVec<[Vec2; NUM_POINTS]> = SmallVec::new();
    for p in &group.points {
        at_depth.push(*p.trail.get(depth)?);
    }

    let n = at_depth.len();
    let mut segments = SmallVec::new();
    for j in 1..n {
        let p1 = at_depth[j];
        let p2 = at_depth[(j + 1) % n];
        segments.push(QuadSegment {
            ctrl: p1,
            end: (p1 + p2) * 0.5,
        });
    }

    let alpha = (1.0 - depth as f32 / RIBBON_WIDTH as f32) * TRAIL_MAX_OPACITY;
    let hue =
        (group.base_hue + hue_drift - depth as f32 * HUE_DEPTH_STEP).rem_euclid(360.0);
    Some(RibbonStroke {
        hue,
        alpha,
        start: at_depth[0],
        segments,
    })
}
