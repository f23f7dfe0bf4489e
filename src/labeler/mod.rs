//! The labeling engine seam and everything that crosses it.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`engine`] | [`LabelingEngine`] / [`EngineBuilder`] traits and [`EngineRequest`] |
//! | [`types`] | Findings, subscriptions, energy labels, credentials |
//! | [`thresholds`] | Default label ladders handed to the engine |
//! | [`validate`] | Subscription id and export destination validation |
//! | [`export`] | [`Exporter`] trait, export type sets, [`FileExporter`] |
//! | [`snapshot`] | Offline engine backend replaying an exported snapshot |

pub mod engine;
pub mod export;
pub mod snapshot;
pub mod thresholds;
pub mod types;
pub mod validate;

pub use engine::{EngineBuilder, EngineRequest, LabelingEngine};
pub use export::{Exporter, ExporterArguments, FileExporter};
pub use validate::DestinationPath;
