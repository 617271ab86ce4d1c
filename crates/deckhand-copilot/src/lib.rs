//! AWS Copilot CLI wrapper for Deckhand
//!
//! This crate runs the external commands the deployment pipeline needs:
//! the fixed `copilot` subcommands (deploy, app ls, svc ls) and the
//! operator-supplied verification command.
//!
//! # Requirements
//!
//! - The `copilot` CLI must be installed and configured
//! - AWS authentication is managed through the ambient environment
//!
//! # Example
//!
//! ```ignore
//! use deckhand_copilot::Copilot;
//!
//! let copilot = Copilot::new();
//! copilot.check_installed().await?;
//!
//! let output = copilot.deploy("api", "hello-copilot", "Dev").await?;
//! println!("{}", output.stdout);
//! ```

pub mod copilot;
pub mod error;
pub mod runner;

pub use copilot::{Copilot, DEPLOY_TIMEOUT};
pub use error::{CopilotError, Result};
pub use runner::{CommandOutput, run, run_with_timeout, split_command};
