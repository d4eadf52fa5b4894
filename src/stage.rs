use crate::{
    core::Progress,
    error::StrataResult,
    eval::{EvaluatedFrame, Evaluator},
    scroll::{ScrollGeometry, ScrollTracker},
    table::CompositionTable,
};

/// Applies one evaluated frame to the visual elements it drives.
///
/// The engine only emits named numeric values; whether they land on a DOM
/// style, a canvas draw call, or a native view property is the adapter's
/// business.
pub trait RenderAdapter {
    fn apply(&mut self, frame: &EvaluatedFrame);
}

/// Wires a scroll tracker, a composition table, and a render adapter into one
/// event-driven pipeline: each scroll or resize sample produces exactly one
/// frame, evaluated from a single progress snapshot, and pushes it out.
///
/// Dropping the stage is the teardown: nothing holds a subscription beyond
/// its lifetime, so no frame can be applied to detached state.
pub struct Stage<A: RenderAdapter> {
    table: CompositionTable,
    tracker: ScrollTracker,
    adapter: A,
}

impl<A: RenderAdapter> Stage<A> {
    /// Validates the table once up front; a stage never exists around an
    /// invalid composition.
    pub fn new(table: CompositionTable, geometry: ScrollGeometry, adapter: A) -> StrataResult<Self> {
        table.validate()?;
        Ok(Self {
            table,
            tracker: ScrollTracker::new(geometry),
            adapter,
        })
    }

    pub fn progress(&self) -> Progress {
        self.tracker.progress()
    }

    pub fn table(&self) -> &CompositionTable {
        &self.table
    }

    #[tracing::instrument(skip(self))]
    pub fn handle_scroll(&mut self, offset: f64) -> StrataResult<EvaluatedFrame> {
        let progress = self.tracker.on_scroll(offset);
        self.emit(progress)
    }

    /// Resize is treated as a progress update at the same raw offset: new
    /// geometry, immediate re-evaluation, no waiting for the next scroll.
    #[tracing::instrument(skip(self))]
    pub fn handle_resize(&mut self, geometry: ScrollGeometry) -> StrataResult<EvaluatedFrame> {
        let progress = self.tracker.on_resize(geometry);
        self.emit(progress)
    }

    /// Detaches, handing the adapter back to the caller.
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    fn emit(&mut self, progress: Progress) -> StrataResult<EvaluatedFrame> {
        let frame = Evaluator::eval_frame(&self.table, progress)?;
        self.adapter.apply(&frame);
        Ok(frame)
    }
}
