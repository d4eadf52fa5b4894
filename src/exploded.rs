use crate::{
    channel::ChannelRole,
    dsl::{ChannelBuilder, TableBuilder},
    error::{StrataError, StrataResult},
    table::CompositionTable,
};

/// One exploded layer and where it comes to rest, in pixels. Negative offsets
/// fan upward, positive downward, zero stays centered.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LayerSpec {
    pub name: String,
    pub offset_px: f64,
}

/// One labeled component: its connector line's full length in pixels.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LabelSpec {
    pub name: String,
    pub line_px: f64,
}

/// Authoring parameters for the exploded-view composition table.
///
/// The defaults reproduce the tuned timing of the production visualization:
/// the assembled view and the layers cross-fade over the same early window
/// (full overlap, so the no-gap invariant holds trivially), lines grow after
/// the fade completes, label text follows the lines, and layer separation
/// freezes at `spread_end` so the held pose leaves scroll room for reading.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ExplodedViewConfig {
    /// End of the cross-fade window (assembled out, layers in).
    pub fade_end: f64,
    /// Where layer offsets reach their terminal separation and hold.
    pub spread_end: f64,
    /// Connector-line growth window.
    pub line_start: f64,
    pub line_end: f64,
    /// Label text reveal window; must not open before `line_end`.
    pub label_start: f64,
    pub label_end: f64,
    /// Leading fraction of the line window in which the dot marker fades in,
    /// so the marker is visible the moment its line starts growing.
    pub marker_fraction: f64,
    pub layers: Vec<LayerSpec>,
    pub labels: Vec<LabelSpec>,
}

impl Default for ExplodedViewConfig {
    fn default() -> Self {
        Self {
            fade_end: 0.20,
            spread_end: 0.75,
            line_start: 0.20,
            line_end: 0.35,
            label_start: 0.35,
            label_end: 0.45,
            marker_fraction: 0.05,
            layers: vec![
                LayerSpec {
                    name: "body".to_string(),
                    offset_px: -180.0,
                },
                LayerSpec {
                    name: "battery".to_string(),
                    offset_px: 0.0,
                },
                LayerSpec {
                    name: "chassis".to_string(),
                    offset_px: 180.0,
                },
            ],
            labels: vec![
                LabelSpec {
                    name: "carbon_body".to_string(),
                    line_px: 180.0,
                },
                LabelSpec {
                    name: "battery".to_string(),
                    line_px: 240.0,
                },
                LabelSpec {
                    name: "chassis".to_string(),
                    line_px: 200.0,
                },
            ],
        }
    }
}

impl ExplodedViewConfig {
    /// Expands the config into a validated [`CompositionTable`]. Any timing
    /// that would break an invariant (empty-screen frame, text before line)
    /// is rejected here, before a single frame is evaluated.
    pub fn build(&self) -> StrataResult<CompositionTable> {
        if !(self.marker_fraction > 0.0 && self.marker_fraction <= 1.0) {
            return Err(StrataError::config(
                "marker_fraction must be in (0, 1]",
            ));
        }

        let mut builder = TableBuilder::new()
            .channel(
                ChannelBuilder::new("assembled.opacity", ChannelRole::AssembledOpacity)
                    .window(0.0, self.fade_end)
                    .range(1.0, 0.0)
                    .build()?,
            )
            .channel(
                ChannelBuilder::new("title.opacity", ChannelRole::TitleOpacity)
                    .window(0.0, self.fade_end)
                    .range(1.0, 0.0)
                    .build()?,
            );

        for layer in &self.layers {
            builder = builder
                .channel(
                    ChannelBuilder::new(
                        format!("layer.{}.opacity", layer.name),
                        ChannelRole::LayerOpacity,
                    )
                    .window(0.0, self.fade_end)
                    .range(0.0, 1.0)
                    .build()?,
                )
                .channel(
                    ChannelBuilder::new(
                        format!("layer.{}.offset_y", layer.name),
                        ChannelRole::LayerOffset,
                    )
                    .window(0.0, self.spread_end)
                    .range(0.0, layer.offset_px)
                    .build()?,
                );
        }

        let marker_end = self.line_start + self.marker_fraction * (self.line_end - self.line_start);
        for label in &self.labels {
            builder = builder
                .channel(
                    ChannelBuilder::new(format!("label.{}.line", label.name), ChannelRole::LineGrowth)
                        .group(label.name.clone())
                        .window(self.line_start, self.line_end)
                        .range(0.0, label.line_px)
                        .build()?,
                )
                .channel(
                    ChannelBuilder::new(
                        format!("label.{}.marker", label.name),
                        ChannelRole::MarkerOpacity,
                    )
                    .group(label.name.clone())
                    .window(self.line_start, marker_end)
                    .range(0.0, 1.0)
                    .build()?,
                )
                .channel(
                    ChannelBuilder::new(format!("label.{}.text", label.name), ChannelRole::LabelOpacity)
                        .group(label.name.clone())
                        .window(self.label_start, self.label_end)
                        .range(0.0, 1.0)
                        .build()?,
                );
        }

        builder.build()
    }
}
