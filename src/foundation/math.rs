//! Single-precision shading helpers.
//!
//! Synthesis runs in `f32` on purpose: every instance must reproduce bit-for-bit, and the field
//! pipeline was tuned at single precision.

use std::ops::{Add, AddAssign, Mul, Sub};

pub(crate) const TAU: f32 = 6.28318;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct V2 {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl V2 {
    pub(crate) const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub(crate) fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub(crate) fn dot(self, o: Self) -> f32 {
        self.x * o.x + self.y * o.y
    }

    pub(crate) fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    pub(crate) fn fract(self) -> Self {
        Self::new(fract(self.x), fract(self.y))
    }

    pub(crate) fn mix(self, o: Self, t: f32) -> Self {
        Self::new(mix(self.x, o.x, t), mix(self.y, o.y, t))
    }

    pub(crate) fn mul_xy(self, o: Self) -> Self {
        Self::new(self.x * o.x, self.y * o.y)
    }

    /// Rotate by a precomputed `(cos, sin)` pair.
    pub(crate) fn rotate(self, cs: V2) -> Self {
        Self::new(
            self.x * cs.x - self.y * cs.y,
            self.x * cs.y + self.y * cs.x,
        )
    }

    /// Unit vector at angle `a` (radians).
    pub(crate) fn from_angle(a: f32) -> Self {
        Self::new(a.cos(), a.sin())
    }
}

impl Add for V2 {
    type Output = V2;
    fn add(self, o: V2) -> V2 {
        V2::new(self.x + o.x, self.y + o.y)
    }
}

impl AddAssign for V2 {
    fn add_assign(&mut self, o: V2) {
        self.x += o.x;
        self.y += o.y;
    }
}

impl Sub for V2 {
    type Output = V2;
    fn sub(self, o: V2) -> V2 {
        V2::new(self.x - o.x, self.y - o.y)
    }
}

impl Mul<f32> for V2 {
    type Output = V2;
    fn mul(self, s: f32) -> V2 {
        V2::new(self.x * s, self.y * s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct V3 {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) z: f32,
}

impl V3 {
    pub(crate) const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub(crate) fn from_f64(c: [f64; 3]) -> Self {
        Self::new(c[0] as f32, c[1] as f32, c[2] as f32)
    }

    pub(crate) fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    pub(crate) fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for V3 {
    type Output = V3;
    fn add(self, o: V3) -> V3 {
        V3::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl AddAssign for V3 {
    fn add_assign(&mut self, o: V3) {
        self.x += o.x;
        self.y += o.y;
        self.z += o.z;
    }
}

impl Mul<f32> for V3 {
    type Output = V3;
    fn mul(self, s: f32) -> V3 {
        V3::new(self.x * s, self.y * s, self.z * s)
    }
}

pub(crate) fn fract(x: f32) -> f32 {
    x - x.floor()
}

pub(crate) fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub(crate) fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// GLSL `step`: 0 below the edge, 1 at or above it.
pub(crate) fn step(edge: f32, x: f32) -> f32 {
    if x < edge { 0.0 } else { 1.0 }
}

/// GLSL `sign`: zero maps to zero.
pub(crate) fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
