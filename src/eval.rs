use crate::{core::Progress, error::StrataResult, table::CompositionTable};

/// All channel outputs for one progress snapshot, in table order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedFrame {
    pub progress: f64,
    pub values: Vec<ChannelValue>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChannelValue {
    pub name: String,
    pub value: f64,
}

impl EvaluatedFrame {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }
}

pub struct Evaluator;

impl Evaluator {
    /// Evaluates every channel against one shared progress snapshot, so
    /// sibling channels in a frame can never observe different progress
    /// values (no tearing between layers).
    #[tracing::instrument(skip(table), fields(channels = table.channels.len()))]
    pub fn eval_frame(table: &CompositionTable, progress: Progress) -> StrataResult<EvaluatedFrame> {
        table.validate()?;

        let values = table
            .channels
            .iter()
            .map(|ch| ChannelValue {
                name: ch.name.clone(),
                value: ch.evaluate(progress),
            })
            .collect();

        Ok(EvaluatedFrame {
            progress: progress.value(),
            values,
        })
    }
}
