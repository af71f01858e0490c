//! Configuration management for the glo rating engine
//!
//! This module handles the tunable model constants, solver search bounds,
//! and environment/TOML loading for the command line front-end.

pub mod app;
pub mod rating;
pub mod solver;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use rating::GloConfig;
pub use solver::{SolverBounds, SolverConfig, SolverOptions};
