//! `jobport-client` -- async side of the application wizard.
//!
//! The [`backend::PortalBackend`] trait is the seam to the REST service;
//! [`backend::HttpBackend`] implements it with [`reqwest`]. On top of it sit
//! the [`gateway::SubmissionGateway`], the [`review::ReviewAggregator`] and
//! the [`runner::WizardRunner`] that drives a
//! [`WizardSession`](jobport_core::wizard::WizardSession) through the
//! validate, submit, advance cycle.

pub mod backend;
pub mod config;
pub mod error;
pub mod gateway;
pub mod review;
pub mod runner;

pub use backend::{HttpBackend, PortalBackend};
pub use config::ClientConfig;
pub use error::{ClientError, ConfigError};
pub use gateway::SubmissionGateway;
pub use review::ReviewAggregator;
pub use runner::{NextOutcome, PrefillReport, WizardRunner};
