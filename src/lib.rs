//! Household electricity usage and cost estimator.
//!
//! The [`estimator`] module is the pure core; everything else loads
//! profiles, renders pages, or serves them.

pub mod cli;
/// TOML profile configuration and presets.
pub mod config;
/// Static tips and about page content.
pub mod content;
pub mod error;
pub mod estimator;
pub mod io;
pub mod logging;
pub mod page;
/// Plain-text page rendering.
pub mod render;

#[cfg(feature = "api")]
pub mod api;
#[cfg(feature = "tui")]
pub mod tui;
