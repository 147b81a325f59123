//! Tick-driven auto-eat controller.
//!
//! Once per host tick the [`AutoEat`] controller decides whether the agent should eat, picks the
//! best food it is allowed to eat, holds the use input until it should stop, and pauses sibling
//! automation (auras, pathing) for the duration of the meal. Its decisions are built from three
//! smaller pieces that are useful on their own:
//!
//! - [`Thresholds`]: health/hunger trigger evaluation.
//! - [`select_best`]: food slot selection under an [`ExclusionSet`].
//! - [`Coordinator`]: suspend/resume bookkeeping for siblings and pathing.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod controller;
pub mod coordination;
pub mod error;
pub mod selector;
pub mod sim;
pub mod threshold;

pub use catalog::{ItemCatalog, VanillaCatalog};
pub use config::AutoEatConfig;
pub use controller::{AutoEat, StopReason, TickOutcome, Verdict};
pub use coordination::{Coordinator, DEFAULT_SIBLINGS};
pub use error::ConfigError;
pub use selector::{select_best, ExclusionSet, Selection};
pub use sim::{HostCall, SimHost, SimRules};
pub use threshold::{ThresholdMode, Thresholds};
