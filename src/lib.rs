pub mod adapters;
pub mod configuration;
pub mod domain;
pub mod signup;
pub mod telemetry;
pub mod tracking;
