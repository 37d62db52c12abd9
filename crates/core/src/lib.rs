//! Core for gagewatch: the chart time-range cursor and the pure date
//! arithmetic behind it.
//!
//! Nothing here performs I/O apart from [`config::WindowConfig::from_env`].

pub mod config;
pub mod serde;
pub mod window;
