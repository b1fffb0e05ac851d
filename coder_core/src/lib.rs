#![forbid(unsafe_code)]

//! Core domain model and business logic for Healthy Coder.
//!
//! This crate provides:
//! - The `Coder` measurement type
//! - BMI calculation, diet recommendation and group scans
//! - Parsing coders from text and JSON
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod calculator;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{read_coders_json, Coder};
pub use calculator::{
    compute_bmi, find_coder_with_worst_bmi, get_bmi_scores, is_diet_recommended,
    DIET_THRESHOLD,
};
pub use config::Config;
