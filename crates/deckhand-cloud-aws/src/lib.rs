//! AWS identity resolution for Deckhand
//!
//! Replaces the pipeline's implicit process-wide cloud session with an
//! explicitly constructed [`AwsIdentity`] scoped to a single run.

pub mod error;
pub mod identity;

pub use error::{AwsError, Result};
pub use identity::AwsIdentity;
