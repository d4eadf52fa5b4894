use crate::{
    core::{Progress, ValueRange, Window},
    ease::Ease,
    error::{StrataError, StrataResult},
};

/// What a channel drives on screen. Roles let the composition table check
/// cross-channel invariants (visibility overlap, line-before-label ordering)
/// without knowing anything about the rendering side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelRole {
    /// Opacity of the fully assembled view (fades out as layers appear).
    AssembledOpacity,
    /// Opacity of one exploded layer (fades in as the assembled view fades).
    LayerOpacity,
    /// Vertical offset of one exploded layer, in pixels.
    LayerOffset,
    /// Opacity of the section title.
    TitleOpacity,
    /// Connector-line length for one labeled component, in pixels.
    LineGrowth,
    /// Opacity of the dot marker at the line's origin.
    MarkerOpacity,
    /// Opacity of the label text revealed after its line is drawn.
    LabelOpacity,
    /// Anything else; exempt from role-specific checks.
    Custom,
}

impl ChannelRole {
    pub fn is_opacity(self) -> bool {
        matches!(
            self,
            Self::AssembledOpacity
                | Self::LayerOpacity
                | Self::TitleOpacity
                | Self::MarkerOpacity
                | Self::LabelOpacity
        )
    }

    /// Roles that contribute to the no-visual-gap invariant.
    pub fn is_visibility(self) -> bool {
        matches!(self, Self::AssembledOpacity | Self::LayerOpacity)
    }
}

/// One named output driven by progress via a windowed interpolation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Channel {
    pub name: String,
    pub role: ChannelRole,
    /// Ties a label's line/marker/text channels together for ordering checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub window: Window,
    pub range: ValueRange,
    #[serde(default)]
    pub ease: Ease,
}

impl Channel {
    pub fn new(
        name: impl Into<String>,
        role: ChannelRole,
        window: Window,
        range: ValueRange,
    ) -> StrataResult<Self> {
        let ch = Self {
            name: name.into(),
            role,
            group: None,
            window,
            range,
            ease: Ease::Linear,
        };
        ch.validate()?;
        Ok(ch)
    }

    pub fn validate(&self) -> StrataResult<()> {
        if self.name.trim().is_empty() {
            return Err(StrataError::config("channel name must be non-empty"));
        }
        self.window.validate().map_err(|e| {
            StrataError::config(format!("channel '{}': {e}", self.name))
        })?;
        self.range.validate().map_err(|e| {
            StrataError::config(format!("channel '{}': {e}", self.name))
        })?;
        if self.role.is_opacity()
            && !((0.0..=1.0).contains(&self.range.v0) && (0.0..=1.0).contains(&self.range.v1))
        {
            return Err(StrataError::config(format!(
                "channel '{}': opacity range ({}, {}) must lie within [0, 1]",
                self.name, self.range.v0, self.range.v1
            )));
        }
        Ok(())
    }

    /// Pure evaluation: flat at `v0` before the window, flat at `v1` after,
    /// eased lerp inside. No side effects; safe to call per channel per frame.
    pub fn evaluate(&self, progress: Progress) -> f64 {
        let t = self.window.normalize(progress.value());
        self.range.at(self.ease.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(start: f64, end: f64, v0: f64, v1: f64) -> Channel {
        Channel::new(
            "c",
            ChannelRole::Custom,
            Window::new(start, end).unwrap(),
            ValueRange { v0, v1 },
        )
        .unwrap()
    }

    #[test]
    fn boundary_values_are_exact() {
        let ch = channel(0.25, 0.75, 2.0, 10.0);
        assert_eq!(ch.evaluate(Progress::new(0.25)), 2.0);
        assert_eq!(ch.evaluate(Progress::new(0.75)), 10.0);
    }

    #[test]
    fn flat_outside_window() {
        let ch = channel(0.3, 0.6, -180.0, 180.0);
        assert_eq!(ch.evaluate(Progress::new(0.0)), -180.0);
        assert_eq!(ch.evaluate(Progress::new(0.29)), -180.0);
        assert_eq!(ch.evaluate(Progress::new(0.61)), 180.0);
        assert_eq!(ch.evaluate(Progress::new(1.0)), 180.0);
    }

    #[test]
    fn monotonic_inside_window() {
        let rising = channel(0.1, 0.9, 0.0, 1.0);
        let falling = channel(0.1, 0.9, 1.0, 0.0);
        let mut prev_up = rising.evaluate(Progress::new(0.1));
        let mut prev_down = falling.evaluate(Progress::new(0.1));
        for i in 1..=80 {
            let p = Progress::new(0.1 + f64::from(i) * 0.01);
            let up = rising.evaluate(p);
            let down = falling.evaluate(p);
            assert!(up >= prev_up);
            assert!(down <= prev_down);
            prev_up = up;
            prev_down = down;
        }
    }

    #[test]
    fn degenerate_window_is_rejected_at_construction() {
        let err = Channel::new(
            "c",
            ChannelRole::Custom,
            Window {
                start: 0.4,
                end: 0.4,
            },
            ValueRange { v0: 0.0, v1: 1.0 },
        );
        assert!(err.is_err());
    }

    #[test]
    fn opacity_roles_require_unit_range() {
        let err = Channel::new(
            "fade",
            ChannelRole::LayerOpacity,
            Window::new(0.0, 0.2).unwrap(),
            ValueRange { v0: 0.0, v1: 1.5 },
        );
        assert!(err.is_err());

        // The same range is fine for a pixel-valued role.
        let ok = Channel::new(
            "offset",
            ChannelRole::LayerOffset,
            Window::new(0.0, 0.2).unwrap(),
            ValueRange { v0: 0.0, v1: 1.5 },
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let ch = channel(0.2, 0.8, 0.0, 100.0);
        let p = Progress::new(0.5);
        assert_eq!(ch.evaluate(p), ch.evaluate(p));
    }
}
