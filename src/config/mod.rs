//! Configuration module
//!
//! Dataset locations, per-dataset view defaults, export settings and the
//! chart record tables, stored as TOML.

pub mod config;
