use std::fmt;

/// Number of attempts made when no `MaxTries` option is supplied.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Predicate deciding whether a failed attempt may be followed by another.
pub type Predicate<'a, E> = Box<dyn FnMut(&E) -> bool + 'a>;

/// One configuration fragment folded into a [`Policy`].
pub enum RetryOption<'a, E> {
    /// Requested attempt budget. Values of 0 and 1 both mean a single attempt;
    /// negative values are ignored.
    MaxTries(i64),
    /// Retry eligibility rule. `None` is ignored.
    RetryIf(Option<Predicate<'a, E>>),
}

impl<'a, E> RetryOption<'a, E> {
    pub fn max_tries(n: i64) -> Self {
        RetryOption::MaxTries(n)
    }

    pub fn retry_if<F>(predicate: F) -> Self
    where
        F: FnMut(&E) -> bool + 'a,
    {
        RetryOption::RetryIf(Some(Box::new(predicate)))
    }
}

impl<E> fmt::Debug for RetryOption<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryOption::MaxTries(n) => f.debug_tuple("MaxTries").field(n).finish(),
            RetryOption::RetryIf(Some(_)) => f.write_str("RetryIf(Some(<predicate>))"),
            RetryOption::RetryIf(None) => f.write_str("RetryIf(None)"),
        }
    }
}

/// Resolved attempt budget and retry predicate for a single execution.
pub struct Policy<'a, E> {
    max_attempts: usize,
    retryable: Predicate<'a, E>,
}

impl<'a, E> Policy<'a, E> {
    /// Folds `options` left to right over the defaults. Later options of the
    /// same kind win; kinds never interact.
    pub fn resolve<I>(options: I) -> Self
    where
        I: IntoIterator<Item = RetryOption<'a, E>>,
    {
        options.into_iter().fold(Self::default(), Self::apply)
    }

    fn apply(mut self, option: RetryOption<'a, E>) -> Self {
        match option {
            RetryOption::MaxTries(n) if n > 1 => {
                self.max_attempts = usize::try_from(n).unwrap_or(usize::MAX);
            }
            RetryOption::MaxTries(n) if n >= 0 => self.max_attempts = 1,
            RetryOption::MaxTries(_) => {}
            RetryOption::RetryIf(Some(predicate)) => self.retryable = predicate,
            RetryOption::RetryIf(None) => {}
        }
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn is_retryable(&mut self, err: &E) -> bool {
        (self.retryable)(err)
    }
}

impl<E> Default for Policy<'_, E> {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retryable: Box::new(|_| true),
        }
    }
}

impl<E> fmt::Debug for Policy<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}
