use std::error::Error;
use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Why a shape task was turned into an empty block sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The task is not a JSON object.
    NotAnObject,
    /// The `tool` field is absent or not a string.
    MissingTool,
    UnknownTool(String),
    /// The record has no `args` field at all.
    MissingArgs,
    /// `args` is present but is not an object.
    BadArgs,
    BadParameter { name: &'static str, found: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnObject => f.write_str("task is not an object"),
            SkipReason::MissingTool => f.write_str("task has no tool name"),
            SkipReason::UnknownTool(name) => write!(f, "unknown tool {name:?}"),
            SkipReason::MissingArgs => f.write_str("task has no args"),
            SkipReason::BadArgs => f.write_str("args is not an object"),
            SkipReason::BadParameter { name, found } => {
                write!(f, "parameter {name} has unusable value {found}")
            }
        }
    }
}

impl Error for SkipReason {}

/// Receives one call per skipped task.
///
/// Batches may be rasterized on several threads, so sinks take `&self`.
pub trait SkipSink: Sync {
    fn skipped(&self, index: usize, reason: &SkipReason);
}

/// Discards reports.
impl SkipSink for () {
    fn skipped(&self, _index: usize, _reason: &SkipReason) {}
}

#[derive(Debug, Default)]
pub struct SkipCounter {
    count: AtomicUsize,
}

impl SkipCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl SkipSink for SkipCounter {
    fn skipped(&self, _index: usize, _reason: &SkipReason) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}

/// Forwards reports to the `log` facade at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkipLog;

impl SkipSink for SkipLog {
    fn skipped(&self, index: usize, reason: &SkipReason) {
        log::warn!(target: "shapes", "skipping shape task #{}: {}", index, reason);
    }
}

/// Keeps every report. Reports from a parallel batch may arrive in any
/// order; `take_sorted` orders them by task index.
#[derive(Debug, Default)]
pub struct SkipRecorder {
    inner: Mutex<Vec<(usize, SkipReason)>>,
}

impl SkipRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_sorted(&self) -> Vec<(usize, SkipReason)> {
        let mut out = match self.inner.lock() {
            Ok(mut g) => std::mem::take(&mut *g),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        out.sort_by_key(|(i, _)| *i);
        out
    }
}

impl SkipSink for SkipRecorder {
    fn skipped(&self, index: usize, reason: &SkipReason) {
        let entry = (index, reason.clone());
        match self.inner.lock() {
            Ok(mut g) => g.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

/// Fans one report out to two sinks.
impl<A: SkipSink, B: SkipSink> SkipSink for (A, B) {
    fn skipped(&self, index: usize, reason: &SkipReason) {
        self.0.skipped(index, reason);
        self.1.skipped(index, reason);
    }
}
