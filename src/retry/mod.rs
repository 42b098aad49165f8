mod executor;
mod outcome;
mod policy;

pub use executor::{execute, execute_optional, execute_with_outcome};
pub use outcome::{RetryOutcome, Termination};
pub use policy::{DEFAULT_MAX_ATTEMPTS, Policy, Predicate, RetryOption};
