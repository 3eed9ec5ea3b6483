use mason_blocks::Block;
use rayon::prelude::*;
use serde_json::Value;

use crate::config::ShapeDefaults;
use crate::skip::SkipSink;
use crate::task::ShapeTask;

/// Turns external shape task records into block sequences.
///
/// A record that cannot be turned into a [`ShapeTask`] yields an empty
/// sequence and one report to the caller's [`SkipSink`]; it never aborts the
/// rest of a batch. The dispatcher holds no mutable state, so one instance
/// can serve many threads.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    defaults: ShapeDefaults,
}

impl Dispatcher {
    pub fn new(defaults: ShapeDefaults) -> Self {
        Self { defaults }
    }

    pub fn rasterize_value(&self, index: usize, task: &Value, sink: &dyn SkipSink) -> Vec<Block> {
        match ShapeTask::from_json(task, &self.defaults) {
            Ok(t) => t.rasterize(),
            Err(reason) => {
                sink.skipped(index, &reason);
                Vec::new()
            }
        }
    }

    /// Rasterizes every task in order and concatenates the results.
    pub fn rasterize_all(&self, tasks: &[Value], sink: &dyn SkipSink) -> Vec<Block> {
        let mut out = Vec::new();
        for (i, task) in tasks.iter().enumerate() {
            out.extend(self.rasterize_value(i, task, sink));
        }
        log::debug!(target: "shapes", "rasterized {} task(s) into {} block(s)", tasks.len(), out.len());
        out
    }

    /// Same output as [`Dispatcher::rasterize_all`], with tasks evaluated on
    /// the rayon pool. Sink reports may arrive out of task order.
    pub fn rasterize_all_par(&self, tasks: &[Value], sink: &dyn SkipSink) -> Vec<Block> {
        let parts: Vec<Vec<Block>> = tasks
            .par_iter()
            .enumerate()
            .map(|(i, task)| self.rasterize_value(i, task, sink))
            .collect();
        let out = parts.concat();
        log::debug!(target: "shapes", "rasterized {} task(s) into {} block(s) (parallel)", tasks.len(), out.len());
        out
    }
}

/// Rasterizes one task record with the built-in defaults. Never fails:
/// unknown tools and malformed records yield an empty sequence.
pub fn rasterize(task: &Value) -> Vec<Block> {
    Dispatcher::default().rasterize_value(0, task, &())
}
