//! Small 2D math helpers shared by the simulation and the trigger responder.

use serde::{Deserialize, Serialize};

/// 2D vector in the simulation's local frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const UP: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        (*self - other).length()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise clamp into `[min, max]`
    pub fn clamp(&self, min: Vec2, max: Vec2) -> Self {
        Self {
            x: self.x.max(min.x).min(max.x),
            y: self.y.max(min.y).min(max.y),
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

/// Clamp to `[0, 1]`. NaN maps to 0 so index math never sees it.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v > 1.0 {
        1.0
    } else if v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Unclamped linear interpolation. Returns `a` exactly when `t == 0`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Placement of the water volume in the world.
///
/// Maps world-space points into the simulation's local frame, and its
/// `scale.y` converts local vertical distances back into world units. Only
/// translation and scale are modelled; the water volume is never rotated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceTransform {
    pub origin: Vec2,
    pub scale: Vec2,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self { origin: Vec2::ZERO, scale: Vec2::new(1.0, 1.0) }
    }
}

impl SurfaceTransform {
    pub fn new(origin: Vec2, scale: Vec2) -> Self {
        Self { origin, scale }
    }

    /// World units per local unit along y
    pub fn vertical_scale(&self) -> f32 {
        self.scale.y
    }

    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.scale.is_finite()
    }

    pub fn world_to_local(&self, world: Vec2) -> Vec2 {
        let d = world - self.origin;
        Vec2::new(safe_div(d.x, self.scale.x), safe_div(d.y, self.scale.y))
    }

    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        Vec2::new(local.x * self.scale.x, local.y * self.scale.y) + self.origin
    }
}

// Zero scale collapses the axis; keep the result finite.
#[inline]
fn safe_div(n: f32, d: f32) -> f32 {
    if d == 0.0 { 0.0 } else { n / d }
}
