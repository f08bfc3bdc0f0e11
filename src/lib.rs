//! Persistent identities for rectangular detections tracked frame-by-frame.
//!
//! The core is the predict → cost → assign → update → spawn → cull engine in
//! [`tracker`]; everything else here is a thin adapter around it (JSON,
//! timestamps, CLI/INI configuration, PNG visualization).

pub mod assignment;
pub mod cli;
pub mod config;
pub mod cost;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kalman;
pub mod track;
pub mod tracker;
pub mod vis;

pub use error::{Result, TrackerError};
pub use geometry::Rect;
pub use tracker::{Label, Tracker, TrackView};
