//! Deterministic controller trace events.
//!
//! `tracing` covers human-readable logs; these events are plain data meant to be recorded during a
//! run and asserted on or replayed later.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TraceKind {
    /// `a`: slot index eaten from, `b`: slot index to restore.
    Start,
    /// `a`: new slot index, `b`: old slot index.
    Swap,
    /// `a`: stop reason code.
    Stop,
    /// Tick skipped because the exclusive consumer was busy.
    Yield,
    /// `a`: position in the sibling list.
    SiblingSuspended,
    /// `a`: position in the sibling list.
    SiblingResumed,
    PathingPaused,
    PathingResumed,
}

impl TraceKind {
    pub fn tag(self) -> &'static str {
        match self {
            TraceKind::Start => "eat.start",
            TraceKind::Swap => "eat.swap",
            TraceKind::Stop => "eat.stop",
            TraceKind::Yield => "eat.yield",
            TraceKind::SiblingSuspended => "eat.sibling_suspended",
            TraceKind::SiblingResumed => "eat.sibling_resumed",
            TraceKind::PathingPaused => "eat.pathing_paused",
            TraceKind::PathingResumed => "eat.pathing_resumed",
        }
    }
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub kind: TraceKind,
    pub a: u64,
    pub b: u64,
}

impl TraceEvent {
    pub fn new(tick: u64, kind: TraceKind) -> Self {
        Self {
            tick,
            kind,
            a: 0,
            b: 0,
        }
    }

    pub fn with_a(mut self, a: u64) -> Self {
        self.a = a;
        self
    }

    pub fn with_b(mut self, b: u64) -> Self {
        self.b = b;
        self
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl VecTraceSink {
    pub fn tags(&self) -> Vec<&'static str> {
        self.events.iter().map(TraceEvent::tag).collect()
    }

    pub fn count(&self, kind: TraceKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Cloneable handle to one event buffer, for reading events back after the sink has been handed
/// to a controller. Single-threaded, like the tick loop.
#[derive(Debug, Clone, Default)]
pub struct SharedTraceSink {
    events: std::rc::Rc<std::cell::RefCell<Vec<TraceEvent>>>,
}

impl SharedTraceSink {
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(TraceEvent::tag).collect()
    }
}

impl TraceSink for SharedTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.borrow_mut().push(event);
    }
}
