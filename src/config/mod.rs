//! Configuration module
//!
//! This module contains all configuration-related functionality,
//! including the config file format and its default location.

pub mod config;
