use retry_executor::config::MAX_TRIES_ENV;
use retry_executor::{ConfigLocation, Error, execute, read_config};

use crate::common::{Flaky, init_logging};

// Single test so that no other test in this binary observes the variable.
#[test]
fn env_budget_lifecycle() {
    init_logging();

    unsafe { std::env::remove_var(MAX_TRIES_ENV) };
    let config = read_config(ConfigLocation::Env).expect("unset is fine");
    assert_eq!(config.max_tries, None);
    let op = Flaky::always_failing();
    let _ = execute(|| op.call(), config.options());
    assert_eq!(op.calls(), 3);

    unsafe { std::env::set_var(MAX_TRIES_ENV, " 4 ") };
    let config = read_config(ConfigLocation::Env).expect("integer budget");
    assert_eq!(config.max_tries, Some(4));
    let op = Flaky::always_failing();
    let _ = execute(|| op.call(), config.options());
    assert_eq!(op.calls(), 4);

    unsafe { std::env::set_var(MAX_TRIES_ENV, "0") };
    let config = read_config(ConfigLocation::Env).expect("zero budget");
    let op = Flaky::always_failing();
    let _ = execute(|| op.call(), config.options());
    assert_eq!(op.calls(), 1);

    unsafe { std::env::set_var(MAX_TRIES_ENV, "lots") };
    let err = read_config(ConfigLocation::Env).expect_err("not an integer");
    match err {
        Error::Config(msg) => assert!(msg.contains(MAX_TRIES_ENV)),
        other => panic!("unexpected error: {:?}", other),
    }

    unsafe { std::env::remove_var(MAX_TRIES_ENV) };
}
