//! Library exports for the paintbox drawing core.
//!
//! Exposes the document model, renderer, interaction controller and file
//! support so that front ends (a GUI window, the script runner in the
//! `paintbox` binary, or the schema dumper) share one implementation.

pub mod config;
pub mod draw;
pub mod input;
pub mod raster;
pub mod script;
pub mod session;
pub mod util;

pub use config::Config;
pub use session::{Command, Outcome, Session};
