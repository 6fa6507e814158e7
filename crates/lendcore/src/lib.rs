//! Core library for the investment property lending platform: pricing and
//! underwriting math, property search, quote generation, and the mock API
//! surface the front ends consume.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
