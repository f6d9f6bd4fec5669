//! Progress reporting and cooperative cancellation.
//!
//! The engine talks to its observer through [`ProgressSink`] only: it polls
//! [`is_cancelled`](ProgressSink::is_cancelled) once before every node
//! expansion and hands a [`Step`] snapshot to
//! [`on_step`](ProgressSink::on_step) after every observable change. The
//! engine never sleeps or waits; pacing is the sink's business.

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gridwalk_core::Pos;

use crate::algorithm::Algorithm;
use crate::trace::{Trace, VisitOrder};

/// Observer of a running search.
pub trait ProgressSink {
    /// Polled before each expansion; returning `true` stops the search with
    /// [`SearchResult::Cancelled`](crate::SearchResult::Cancelled).
    fn is_cancelled(&self) -> bool {
        false
    }

    /// Called after a node is expanded, the frontier changes or a path is
    /// found. Nothing done here affects the search except through
    /// [`is_cancelled`](Self::is_cancelled).
    fn on_step(&mut self, step: &Step<'_>);
}

/// A borrowed snapshot of search state, valid for one [`ProgressSink::on_step`]
/// call.
#[derive(Clone, Copy, Debug)]
pub struct Step<'a> {
    pub algorithm: Algorithm,
    pub frontier: &'a [Pos],
    pub explored: &'a [Pos],
    /// Empty until a path is found.
    pub path: &'a [Pos],
    /// Free-form progress text such as the current depth or cost.
    pub info: &'a str,
    pub visit_order: &'a VisitOrder,
}

impl Step<'_> {
    /// Display name of the running algorithm.
    #[inline]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Copy the snapshot into an owned [`StepRecord`].
    pub fn to_record(&self) -> StepRecord {
        StepRecord {
            algorithm: self.algorithm,
            frontier: self.frontier.to_vec(),
            explored: self.explored.to_vec(),
            path: self.path.to_vec(),
            info: self.info.to_owned(),
            visit_order: self.visit_order.clone(),
        }
    }
}

/// Owned copy of a [`Step`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    pub algorithm: Algorithm,
    pub frontier: Vec<Pos>,
    pub explored: Vec<Pos>,
    pub path: Vec<Pos>,
    pub info: String,
    #[cfg_attr(feature = "serde", serde(with = "indexmap::map::serde_seq"))]
    pub visit_order: VisitOrder,
}

impl ProgressSink for () {
    #[inline]
    fn on_step(&mut self, _step: &Step<'_>) {}
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }

    #[inline]
    fn on_step(&mut self, step: &Step<'_>) {
        (**self).on_step(step);
    }
}

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

/// Records every step for later replay or inspection.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    steps: Vec<StepRecord>,
    cancel: Option<CancelToken>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that also reports cancellation from `token`.
    pub fn with_token(token: CancelToken) -> Self {
        Self {
            steps: Vec::new(),
            cancel: Some(token),
        }
    }

    /// The recorded steps, oldest first.
    #[inline]
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// The most recent step.
    #[inline]
    pub fn last(&self) -> Option<&StepRecord> {
        self.steps.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Drop all recorded steps.
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn into_steps(self) -> Vec<StepRecord> {
        self.steps
    }
}

impl ProgressSink for Recorder {
    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    fn on_step(&mut self, step: &Step<'_>) {
        self.steps.push(step.to_record());
    }
}

// ---------------------------------------------------------------------------
// CancelToken
// ---------------------------------------------------------------------------

/// A shareable cancellation flag.
///
/// Clones share the flag, so one clone can be handed to a search (as its
/// sink) while another is kept by a watchdog or UI thread.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every search polling this token to stop.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Clear the flag so the token can be reused for another search.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl ProgressSink for CancelToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        CancelToken::is_cancelled(self)
    }

    #[inline]
    fn on_step(&mut self, _step: &Step<'_>) {}
}

// ---------------------------------------------------------------------------
// CancelAfter
// ---------------------------------------------------------------------------

/// Wraps a sink and cancels once it has been polled `polls` times.
///
/// With one poll per expansion this caps the work a search may do.
#[derive(Debug)]
pub struct CancelAfter<S = ()> {
    inner: S,
    remaining: Cell<usize>,
}

impl CancelAfter<()> {
    /// Cancel after `polls` polls, discarding steps.
    pub fn new(polls: usize) -> Self {
        Self::wrap(polls, ())
    }
}

impl<S: ProgressSink> CancelAfter<S> {
    /// Cancel after `polls` polls, forwarding steps to `inner`.
    pub fn wrap(polls: usize, inner: S) -> Self {
        Self {
            inner,
            remaining: Cell::new(polls),
        }
    }

    /// The wrapped sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ProgressSink> ProgressSink for CancelAfter<S> {
    fn is_cancelled(&self) -> bool {
        if self.inner.is_cancelled() {
            return true;
        }
        match self.remaining.get() {
            0 => true,
            n => {
                self.remaining.set(n - 1);
                false
            }
        }
    }

    fn on_step(&mut self, step: &Step<'_>) {
        self.inner.on_step(step);
    }
}

// ---------------------------------------------------------------------------
// OnStep
// ---------------------------------------------------------------------------

/// Adapts a closure into a sink that never cancels.
pub struct OnStep<F>(pub F);

impl<F: FnMut(&Step<'_>)> ProgressSink for OnStep<F> {
    fn on_step(&mut self, step: &Step<'_>) {
        (self.0)(step);
    }
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Engine-side handle on the optional sink of one invocation.
pub(crate) struct Notifier<'s> {
    sink: Option<&'s mut dyn ProgressSink>,
    algorithm: Algorithm,
}

impl<'s> Notifier<'s> {
    pub(crate) fn new(algorithm: Algorithm, sink: Option<&'s mut dyn ProgressSink>) -> Self {
        Self { sink, algorithm }
    }

    /// Whether anybody is listening; snapshots are skipped otherwise.
    #[inline]
    pub(crate) fn is_active(&self) -> bool {
        self.sink.is_some()
    }

    #[inline]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| s.is_cancelled())
    }

    /// Send a snapshot of `trace` to the sink. `info` is only built when a
    /// sink is attached.
    pub(crate) fn step(&mut self, trace: &Trace, path: &[Pos], info: impl FnOnce() -> String) {
        let Some(sink) = self.sink.as_deref_mut() else {
            return;
        };
        let info = info();
        sink.on_step(&Step {
            algorithm: self.algorithm,
            frontier: trace.frontier(),
            explored: trace.explored(),
            path,
            info: &info,
            visit_order: trace.visit_order(),
        });
    }
}
