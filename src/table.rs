use std::collections::{BTreeMap, BTreeSet};

use crate::{
    channel::{Channel, ChannelRole},
    core::Progress,
    error::{StrataError, StrataResult},
};

/// The full, ordered set of channel definitions for one visualization.
///
/// Authored once, validated once, immutable at runtime; only evaluated output
/// changes per frame.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CompositionTable {
    pub channels: Vec<Channel>,
}

impl CompositionTable {
    pub fn new(channels: Vec<Channel>) -> StrataResult<Self> {
        let table = Self { channels };
        table.validate()?;
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name == name)
    }

    /// Fail-fast configuration checks. Anything that would surface as NaN or
    /// a visible seam during scrolling is rejected here instead.
    pub fn validate(&self) -> StrataResult<()> {
        let mut names = BTreeSet::new();
        for ch in &self.channels {
            ch.validate()?;
            if !names.insert(ch.name.as_str()) {
                return Err(StrataError::config(format!(
                    "duplicate channel name '{}'",
                    ch.name
                )));
            }
        }
        self.check_reveal_ordering()?;
        self.check_marker_containment()?;
        self.check_no_visual_gap()?;
        Ok(())
    }

    /// A label's text may only start fading in once its connector line has
    /// finished growing: `line.window.end <= label.window.start` per group.
    fn check_reveal_ordering(&self) -> StrataResult<()> {
        for (group, line, label) in self.grouped_pairs(ChannelRole::LineGrowth, ChannelRole::LabelOpacity) {
            if line.window.end > label.window.start {
                return Err(StrataError::config(format!(
                    "group '{group}': line growth ends at {} but label text starts at {}; \
                     text must not reveal before its line is drawn",
                    line.window.end, label.window.start
                )));
            }
        }
        Ok(())
    }

    /// The dot marker shows that line growth has begun, so its window must
    /// open with the line's window and close within it.
    fn check_marker_containment(&self) -> StrataResult<()> {
        for (group, line, marker) in self.grouped_pairs(ChannelRole::LineGrowth, ChannelRole::MarkerOpacity) {
            if marker.window.start != line.window.start || marker.window.end > line.window.end {
                return Err(StrataError::config(format!(
                    "group '{group}': marker window ({}, {}) must open with and fit inside \
                     the line window ({}, {})",
                    marker.window.start, marker.window.end, line.window.start, line.window.end
                )));
            }
        }
        Ok(())
    }

    /// No-visual-gap invariant: at every progress value at least one of the
    /// assembled view or an exploded layer is partially visible.
    ///
    /// Between adjacent window breakpoints every opacity channel is linear, so
    /// their pointwise max is convex there and attains its minimum at a
    /// breakpoint. Checking breakpoints is therefore exact, not a sampling
    /// approximation.
    fn check_no_visual_gap(&self) -> StrataResult<()> {
        let visibility: Vec<&Channel> = self
            .channels
            .iter()
            .filter(|c| c.role.is_visibility())
            .collect();
        if visibility.is_empty() {
            return Ok(());
        }

        let mut breakpoints = vec![0.0, 1.0];
        for ch in &visibility {
            breakpoints.push(ch.window.start);
            breakpoints.push(ch.window.end);
        }
        breakpoints.sort_by(|a, b| a.total_cmp(b));
        breakpoints.dedup();

        for &p in &breakpoints {
            let progress = Progress::new(p);
            let max = visibility
                .iter()
                .map(|c| c.evaluate(progress))
                .fold(0.0_f64, f64::max);
            if max <= 0.0 {
                return Err(StrataError::config(format!(
                    "no visible layer at progress {p}: widen the overlap between the \
                     assembled view's fade-out and the layers' fade-in windows"
                )));
            }
        }
        Ok(())
    }

    /// Pairs of (group, channel-with-role-a, channel-with-role-b) for every
    /// group that declares both roles.
    fn grouped_pairs(
        &self,
        a: ChannelRole,
        b: ChannelRole,
    ) -> impl Iterator<Item = (&str, &Channel, &Channel)> {
        let mut by_group: BTreeMap<&str, (Option<&Channel>, Option<&Channel>)> = BTreeMap::new();
        for ch in &self.channels {
            let Some(group) = ch.group.as_deref() else {
                continue;
            };
            let entry = by_group.entry(group).or_default();
            if ch.role == a {
                entry.0 = Some(ch);
            } else if ch.role == b {
                entry.1 = Some(ch);
            }
        }
        by_group
            .into_iter()
            .filter_map(|(g, (ca, cb))| Some((g, ca?, cb?)))
    }
}
