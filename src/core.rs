use crate::error::{StrataError, StrataResult};

pub use kurbo::{Point, Rect};

/// Normalized scroll position within a pinned section, always in [0,1].
///
/// Ephemeral: recomputed per scroll sample, never accumulated.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Clamps into [0,1]. NaN maps to 0 so downstream math never sees it.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Progress sub-range over which a channel's value changes; flat outside it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    pub start: f64,
    pub end: f64,
}

impl Window {
    pub fn new(start: f64, end: f64) -> StrataResult<Self> {
        let w = Self { start, end };
        w.validate()?;
        Ok(w)
    }

    /// Degenerate windows (start == end) would divide by zero at evaluation
    /// time, so they are rejected here instead.
    pub fn validate(self) -> StrataResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(StrataError::config("window bounds must be finite"));
        }
        if !(0.0..=1.0).contains(&self.start) || !(0.0..=1.0).contains(&self.end) {
            return Err(StrataError::config(format!(
                "window ({}, {}) must lie within [0, 1]",
                self.start, self.end
            )));
        }
        if self.start >= self.end {
            return Err(StrataError::config(format!(
                "window start {} must be < end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    pub fn span(self) -> f64 {
        self.end - self.start
    }

    pub fn contains(self, progress: f64) -> bool {
        self.start <= progress && progress <= self.end
    }

    /// Window-local time: 0 at `start`, 1 at `end`, clamped outside.
    pub fn normalize(self, progress: f64) -> f64 {
        ((progress - self.start) / self.span()).clamp(0.0, 1.0)
    }
}

/// Output endpoints: the channel holds `v0` before its window and `v1` after.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValueRange {
    pub v0: f64,
    pub v1: f64,
}

impl ValueRange {
    pub fn new(v0: f64, v1: f64) -> StrataResult<Self> {
        let r = Self { v0, v1 };
        r.validate()?;
        Ok(r)
    }

    pub fn validate(self) -> StrataResult<()> {
        if !self.v0.is_finite() || !self.v1.is_finite() {
            return Err(StrataError::config("range endpoints must be finite"));
        }
        Ok(())
    }

    pub fn at(self, t: f64) -> f64 {
        lerp(self.v0, self.v1, t)
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
