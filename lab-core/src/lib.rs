//! Core library for the animated particle background and the logic lab.
//!
//! Main components:
//! - [`field`] — the particle field simulator context (`initialize` / `tick`).
//! - [`phases`] — per-frame update steps: integrate, bounce, repel.
//! - [`particle`] — particles and particle sets.
//! - [`pointer`] — the atomically shared pointer position.
//! - [`render`] — the drawing contract between the field and a host surface.
//! - [`classifier`] — keyword heuristic labelling lines and estimating complexity.
//! - [`report`] — display text and colours for classifier output.
//! - [`config`] — tunables, loadable from TOML.
//! - [`error`] — error type for configuration loading.
//! - [`types`] — the viewport.

pub mod classifier;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod phases;
pub mod pointer;
pub mod render;
pub mod report;
pub mod types;

pub use error::{Error, Result};
