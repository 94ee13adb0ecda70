use glam::Vec2;
use rand::prelude::*;
use std::collections::VecDeque;
use std::f32::consts::PI;

use crate::constants::*;

/// One moving control point of a ribbon, with its bounded position history.
#[derive(Clone, Debug)]
pub struct Point {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Smoothly wandering heading angle driving the curvature. Left
    /// unnormalized across wall reflections; only its sin/cos are consumed.
    pub heading_noise: f32,
    /// Recent positions, newest first. Never longer than `RIBBON_WIDTH`.
    pub trail: VecDeque<Vec2>,
}

/// A set of points sharing a color family, forming one closed ribbon.
#[derive(Clone, Debug)]
pub struct Group {
    pub points: Vec<Point>,
    pub base_hue: f32,
}

/// The whole simulated field: `GROUP_COUNT` independent ribbons bouncing
/// inside a rectangular viewport.
///
/// The field is created fresh for every activation of the effect and
/// discarded on deactivation. All randomness flows from the `seed` passed to
/// [`RibbonField::new`], so a fixed seed reproduces exact trajectories.
pub struct RibbonField {
    pub groups: Vec<Group>,
    bounds: Vec2,
    rng: StdRng,
}

impl RibbonField {
    /// Build a field with randomized points and evenly spaced base hues.
    ///
    /// Hues are `360 / GROUP_COUNT` degrees apart, starting from a random
    /// offset so consecutive activations don't repeat the same palette.
    pub fn new(bounds: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let hue_step = 360.0 / GROUP_COUNT as f32;
        let start_offset = rng.gen::<f32>() * 360.0;

        let groups = (0..GROUP_COUNT)
            .map(|g| {
                let points = (0..NUM_POINTS)
                    .map(|_| {
                        let angle = rng.gen::<f32>() * PI * 2.0;
                        Point {
                            pos: Vec2::new(
                                rng.gen::<f32>() * bounds.x,
                                rng.gen::<f32>() * bounds.y,
                            ),
                            vel: Vec2::from_angle(angle) * MIN_SPEED,
                            heading_noise: rng.gen::<f32>() * PI * 2.0,
                            trail: VecDeque::with_capacity(RIBBON_WIDTH + 1),
                        }
                    })
                    .collect();
                Group {
                    points,
                    base_hue: (start_offset + g as f32 * hue_step) % 360.0,
                }
            })
            .collect();

        log::debug!(
            "ribbon field: {} groups x {} points in {}x{}",
            GROUP_COUNT,
            NUM_POINTS,
            bounds.x,
            bounds.y
        );
        Self { groups, bounds, rng }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Adopt new viewport bounds. Positions and trails are kept as-is;
    /// points simply bounce off the new edges from the next step on.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Advance every point by one frame: wander the heading, accelerate,
    /// clamp speed, integrate, reflect off the walls, record the trail.
    pub fn advance(&mut self) {
        let bounds = self.bounds;
        let rng = &mut self.rng;
        for group in &mut self.groups {
            for p in &mut group.points {
                p.heading_noise += (rng.gen::<f32>() - 0.5) * NOISE_SCALE;
                p.vel += Vec2::from_angle(p.heading_noise) * HEADING_ACCEL;

                let speed = p.vel.length();
                if speed < MIN_SPEED {
                    if speed > f32::EPSILON {
                        p.vel *= MIN_SPEED / speed;
                    } else {
                        // zero velocity has no direction to rescale; restart
                        // along the heading
                        p.vel = Vec2::from_angle(p.heading_noise) * MIN_SPEED;
                    }
                } else if speed > MAX_SPEED {
                    p.vel *= MAX_SPEED / speed;
                }

                p.pos += p.vel;

                // Wall bounce: clamp to the edge and mirror heading so the
                // point curves away instead of hugging the wall.
                if p.pos.x < 0.0 {
                    p.pos.x = 0.0;
                    p.vel.x = -p.vel.x;
                    p.heading_noise = PI - p.heading_noise;
                }
                if p.pos.x > bounds.x {
                    p.pos.x = bounds.x;
                    p.vel.x = -p.vel.x;
                    p.heading_noise = PI - p.heading_noise;
                }
                if p.pos.y < 0.0 {
                    p.pos.y = 0.0;
                    p.vel.y = -p.vel.y;
                    p.heading_noise = -p.heading_noise;
                }
                if p.pos.y > bounds.y {
                    p.pos.y = bounds.y;
                    p.vel.y = -p.vel.y;
                    p.heading_noise = -p.heading_noise;
                }

                p.trail.push_front(p.pos);
                if p.trail.len() > RIBBON_WIDTH {
                    p.trail.pop_back();
                }
            }
        }
    }
}
