//! Synchronous retry executor.
//!
//! [`execute`] invokes a fallible operation until it succeeds, a retry
//! predicate rejects its error, or the attempt budget is exhausted. The budget
//! and predicate are folded from [`RetryOption`]s on every call; nothing is
//! shared between calls. Delays, timeouts and backoff are left to the caller.

pub mod config;
pub mod errors;
pub mod retry;


pub use config::{ConfigLocation, RetryConfig, read_config};
pub use errors::Error;
pub use retry::{
    Policy, RetryOption, RetryOutcome, Termination, execute, execute_optional,
    execute_with_outcome,
};
