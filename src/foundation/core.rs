use crate::foundation::error::{ProcgenError, ProcgenResult};

/// Closed numeric interval `[min, max]`.
///
/// Ranges are plain data so presets can be declared as constants; [`Range::validate`] is the gate
/// every preset passes through before it can be used.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Range {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Range {
    /// Build a range without validation (used for static tables).
    pub const fn of(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Reject non-finite bounds and `min > max`.
    pub fn validate(&self, what: &str) -> ProcgenResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ProcgenError::validation(format!(
                "{what}: bounds must be finite (got {}..{})",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(ProcgenError::validation(format!(
                "{what}: min {} must be <= max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp `v` into the range.
    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }

    /// Map `t` in `[0, 1]` onto the range (no clamping of `t`).
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t
    }

    /// Position of `v` inside the range as a `[0, 1]` fraction; zero-span ranges map to 0.
    pub fn unlerp(&self, v: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            0.0
        } else {
            ((v - self.min) / span).clamp(0.0, 1.0)
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }
}

/// Straight RGB triple (no alpha), one float per channel.
pub type Rgb = [f64; 3];

/// Pixel dimensions of a raster target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Build a validated resolution (both sides `>= 1`).
    pub fn new(width: u32, height: u32) -> ProcgenResult<Self> {
        if width == 0 || height == 0 {
            return Err(ProcgenError::validation(format!(
                "resolution must be at least 1x1 (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Square resolution.
    pub fn square(size: u32) -> ProcgenResult<Self> {
        Self::new(size, size)
    }

    /// `width / height`, guarding against a zero height.
    pub fn aspect(self) -> f32 {
        self.width as f32 / (self.height.max(1) as f32)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
