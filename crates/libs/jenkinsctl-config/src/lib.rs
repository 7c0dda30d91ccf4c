//! Configuration management for the jenkinsctl CLI.
//!
//! Locates and parses the JSON configuration file describing the Jenkins
//! server URL and the credentials used to talk to it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jenkinsctl_config::JenkinsConfig;
//!
//! // Load $HOME/.config/jenkinsctl/config.json
//! let config = JenkinsConfig::resolve(None).unwrap();
//! println!("talking to {} as {}", config.server, config.user);
//! ```

pub mod config;
pub mod error;
pub mod prelude;

pub use config::JenkinsConfig;
