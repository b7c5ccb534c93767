//! mergelog-cli library
//!
//! This module exports the mergelog command's configuration and run
//! pipeline for use in integration tests.

pub mod app;
pub mod config;
