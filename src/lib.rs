// Domain layer - Grid, rule engine, seed patterns
pub mod domain;

// Application layer - Interaction state machine and coordinate mapping
pub mod application;

// Shared constants
pub mod config;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use application::{Command, Event, GameState, Layout, Mode, Target};
pub use config::{Config, ConfigError};
