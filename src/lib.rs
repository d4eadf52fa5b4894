#![forbid(unsafe_code)]

pub mod channel;
pub mod core;
pub mod dsl;
pub mod ease;
pub mod error;
pub mod eval;
pub mod exploded;
pub mod pricing;
pub mod scroll;
pub mod slider;
pub mod stage;
pub mod table;

pub use channel::{Channel, ChannelRole};
pub use self::core::{Progress, ValueRange, Window};
pub use dsl::{ChannelBuilder, TableBuilder};
pub use ease::Ease;
pub use error::{StrataError, StrataResult};
pub use eval::{ChannelValue, EvaluatedFrame, Evaluator};
pub use exploded::{ExplodedViewConfig, LabelSpec, LayerSpec};
pub use scroll::{ScrollGeometry, ScrollTracker};
pub use stage::{RenderAdapter, Stage};
pub use table::CompositionTable;
