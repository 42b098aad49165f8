use tracing::trace;

use super::outcome::{RetryOutcome, Termination};
use super::policy::{Policy, RetryOption};

/// Runs `operation` until it succeeds, the retry predicate rejects its error,
/// or the attempt budget is spent. The returned error is always the last one
/// the operation produced.
pub fn execute<'a, T, E, F, I>(operation: F, options: I) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    I: IntoIterator<Item = RetryOption<'a, E>>,
    E: 'a,
{
    execute_with_outcome(operation, options).0
}

/// Same as [`execute`] for callers holding an optional operation.
///
/// # Panics
///
/// Panics if `operation` is `None`, before `options` is iterated.
pub fn execute_optional<'a, T, E, F, I>(operation: Option<F>, options: I) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    I: IntoIterator<Item = RetryOption<'a, E>>,
    E: 'a,
{
    let Some(operation) = operation else {
        panic!("retry operation is absent");
    };
    execute(operation, options)
}

/// Same as [`execute`], additionally reporting how the loop terminated.
pub fn execute_with_outcome<'a, T, E, F, I>(
    operation: F,
    options: I,
) -> (Result<T, E>, RetryOutcome)
where
    F: FnMut() -> Result<T, E>,
    I: IntoIterator<Item = RetryOption<'a, E>>,
    E: 'a,
{
    let policy = Policy::resolve(options);
    let (result, outcome) = run(operation, policy);
    outcome.log();
    (result, outcome)
}

fn run<T, E, F>(mut operation: F, mut policy: Policy<'_, E>) -> (Result<T, E>, RetryOutcome)
where
    F: FnMut() -> Result<T, E>,
{
    let max_attempts = policy.max_attempts();
    let outcome = |termination, attempts| RetryOutcome {
        termination,
        attempts,
        max_attempts,
    };
    let mut attempt: usize = 1;
    loop {
        match operation() {
            Ok(value) => return (Ok(value), outcome(Termination::Succeeded, attempt)),
            Err(err) => {
                // The predicate runs on every failure, the last one included.
                if !policy.is_retryable(&err) {
                    return (Err(err), outcome(Termination::Rejected, attempt));
                }
                if attempt >= max_attempts {
                    return (Err(err), outcome(Termination::Exhausted, attempt));
                }
                trace!(attempt, max_attempts, "retry.retrying");
                attempt += 1;
            }
        }
    }
}
