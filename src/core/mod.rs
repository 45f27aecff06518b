//! Core configuration and value types shared across the pipeline.

pub mod config;
pub mod models;
