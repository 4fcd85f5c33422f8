pub mod config;
pub mod error;
pub mod monitor;
pub mod provider;
pub mod registry;
pub mod status;

pub use config::Config;
pub use error::FritError;
pub use monitor::MonitorPlan;
pub use provider::{Category, FreeTier, Limit, OfferDuration, Period, Provider};
pub use registry::Registry;
