use crate::{
    channel::{Channel, ChannelRole},
    core::{ValueRange, Window},
    ease::Ease,
    error::{StrataError, StrataResult},
    table::CompositionTable,
};

/// Builder for a [`CompositionTable`]; `build()` runs the full fail-fast
/// validation, including the cross-channel invariants.
pub struct TableBuilder {
    channels: Vec<Channel>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
        }
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    pub fn build(self) -> StrataResult<CompositionTable> {
        CompositionTable::new(self.channels)
    }
}

/// Builder for a single [`Channel`]. Window and range default to identity
/// ((0,1) → (0,1)); `build()` rejects anything the channel itself rejects.
pub struct ChannelBuilder {
    name: String,
    role: ChannelRole,
    group: Option<String>,
    window: (f64, f64),
    range: (f64, f64),
    ease: Ease,
}

impl ChannelBuilder {
    pub fn new(name: impl Into<String>, role: ChannelRole) -> Self {
        Self {
            name: name.into(),
            role,
            group: None,
            window: (0.0, 1.0),
            range: (0.0, 1.0),
            ease: Ease::Linear,
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn window(mut self, start: f64, end: f64) -> Self {
        self.window = (start, end);
        self
    }

    pub fn range(mut self, v0: f64, v1: f64) -> Self {
        self.range = (v0, v1);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn build(self) -> StrataResult<Channel> {
        if self.name.trim().is_empty() {
            return Err(StrataError::config("channel name must be non-empty"));
        }
        let mut ch = Channel::new(
            self.name,
            self.role,
            Window::new(self.window.0, self.window.1)?,
            ValueRange::new(self.range.0, self.range.1)?,
        )?;
        ch.group = self.group;
        ch.ease = self.ease;
        ch.validate()?;
        Ok(ch)
    }
}
