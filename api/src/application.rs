pub mod http;
pub mod startup;
pub mod telemetry;
