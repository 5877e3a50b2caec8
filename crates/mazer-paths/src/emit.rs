//! Step events and the machinery that delivers them.
//!
//! Engines never talk to a transport directly. They report progress through
//! an [`Emitter`], which forwards each [`StepEvent`] to a [`StepSink`],
//! waits on a [`Pacer`], and stops the search once its [`Context`] is
//! cancelled or the sink goes away.

use std::fmt;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

use mazer_core::{Context, Point};

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// What happened at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepKind {
    /// The search begins here. Always the first event.
    Start,
    /// The position was taken off the frontier for expansion.
    Visiting,
    /// The position was discovered and admitted to the frontier.
    Frontier,
    /// The position is part of the final path.
    Solution,
}

/// A single unit of search progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    pub pos: Point,
    pub kind: StepKind,
}

impl StepEvent {
    #[inline]
    pub const fn new(kind: StepKind, pos: Point) -> Self {
        Self { pos, kind }
    }
}

/// Returned when a solve stops early: the context was cancelled or the
/// listener disconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

impl fmt::Display for Aborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("solve aborted")
    }
}

impl std::error::Error for Aborted {}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// The single listener of one solve.
pub trait StepSink {
    /// Deliver one event. An error stops the search.
    fn emit(&mut self, event: StepEvent) -> Result<(), Aborted>;
}

/// Collects every event in order.
impl StepSink for Vec<StepEvent> {
    fn emit(&mut self, event: StepEvent) -> Result<(), Aborted> {
        self.push(event);
        Ok(())
    }
}

/// Forwards events over a channel. A dropped receiver aborts the solve.
impl StepSink for Sender<StepEvent> {
    fn emit(&mut self, event: StepEvent) -> Result<(), Aborted> {
        self.send(event).map_err(|_| Aborted)
    }
}

impl<S: StepSink + ?Sized> StepSink for &mut S {
    fn emit(&mut self, event: StepEvent) -> Result<(), Aborted> {
        (**self).emit(event)
    }
}

/// Adapts a closure into a [`StepSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(StepEvent)> StepSink for FnSink<F> {
    fn emit(&mut self, event: StepEvent) -> Result<(), Aborted> {
        (self.0)(event);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Pacing
// ---------------------------------------------------------------------------

/// Presentation delay between two events. Never affects the result.
pub trait Pacer {
    fn pause(&mut self, ctx: &Context);
}

/// No delay at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    #[inline]
    fn pause(&mut self, _ctx: &Context) {}
}

/// Sleeps for a fixed delay, waking early when the context is cancelled.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    delay: Duration,
}

/// Longest uninterrupted sleep inside [`SleepPacer::pause`].
const SLEEP_SLICE: Duration = Duration::from_millis(10);

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, ctx: &Context) {
        let deadline = Instant::now() + self.delay;
        loop {
            if ctx.is_done() {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            thread::sleep((deadline - now).min(SLEEP_SLICE));
        }
    }
}

/// Named animation speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Speed {
    /// Parse a speed name. Unknown names fall back to [`Speed::Medium`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "slow" => Speed::Slow,
            "fast" => Speed::Fast,
            _ => Speed::Medium,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
        }
    }

    /// Reference delay between events.
    pub fn delay(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(500),
            Speed::Medium => Duration::from_millis(200),
            Speed::Fast => Duration::from_millis(50),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Number of events emitted so far, per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub start: usize,
    pub visiting: usize,
    pub frontier: usize,
    pub solution: usize,
}

impl Stats {
    fn record(&mut self, kind: StepKind) {
        match kind {
            StepKind::Start => self.start += 1,
            StepKind::Visiting => self.visiting += 1,
            StepKind::Frontier => self.frontier += 1,
            StepKind::Solution => self.solution += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.start + self.visiting + self.frontier + self.solution
    }
}

/// Sink, pacer and cancellation token of one solve.
pub struct Emitter<S, P> {
    sink: S,
    pacer: P,
    ctx: Context,
    stats: Stats,
}

impl Emitter<Vec<StepEvent>, NoDelay> {
    /// An emitter that records every event without delay.
    pub fn capture() -> Self {
        Self::new(Vec::new(), NoDelay, Context::new())
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[StepEvent] {
        &self.sink
    }
}

impl<S: StepSink, P: Pacer> Emitter<S, P> {
    pub fn new(sink: S, pacer: P, ctx: Context) -> Self {
        Self {
            sink,
            pacer,
            ctx,
            stats: Stats::default(),
        }
    }

    /// Deliver one event, then pause.
    ///
    /// Fails without delivering anything if the context is already
    /// cancelled, and fails after delivery if it was cancelled during the
    /// pause.
    pub fn emit(&mut self, kind: StepKind, pos: Point) -> Result<(), Aborted> {
        if self.ctx.is_done() {
            return Err(Aborted);
        }
        self.sink.emit(StepEvent::new(kind, pos))?;
        self.stats.record(kind);
        self.pacer.pause(&self.ctx);
        if self.ctx.is_done() {
            return Err(Aborted);
        }
        Ok(())
    }

    /// Emit one [`StepKind::Solution`] event per point, in order.
    pub fn emit_path(&mut self, path: &[Point]) -> Result<(), Aborted> {
        for &p in path {
            self.emit(StepKind::Solution, p)?;
        }
        Ok(())
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
