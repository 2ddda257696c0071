//! Environment-driven client configuration
//!
//! Everything lives in a single test so the process environment is never
//! mutated from two threads at once.

use openai_wrapper::{OpenAI, OpenAIRequestError};

const VARS: [&str; 3] = ["OPENAI_API_KEY", "OPENAI_BASE_URL", "OPENAI_ORGANIZATION"];

fn set(key: &str, value: &str) {
    // SAFETY: only this test touches the environment in this binary.
    unsafe { std::env::set_var(key, value) }
}

fn unset(key: &str) {
    // SAFETY: see `set`.
    unsafe { std::env::remove_var(key) }
}

#[test]
fn test_client_from_env() {
    let saved: Vec<_> = VARS.iter().map(|key| (*key, std::env::var(key).ok())).collect();
    for key in VARS {
        unset(key);
    }

    let err = OpenAI::from_env().expect_err("key is unset");
    assert!(matches!(err, OpenAIRequestError::MissingApiKey));

    set("OPENAI_API_KEY", "   ");
    let err = OpenAI::from_env().expect_err("key is blank");
    assert!(matches!(err, OpenAIRequestError::MissingApiKey));

    set("OPENAI_API_KEY", "sk-from-env");
    let client = OpenAI::from_env().expect("key is set");
    assert_eq!(client.api_key(), "sk-from-env");
    assert_eq!(client.base_url(), "https://api.openai.com/v1");
    assert_eq!(client.organization(), None);

    set("OPENAI_BASE_URL", "http://localhost:8080/v1");
    set("OPENAI_ORGANIZATION", "org-from-env");
    let client = OpenAI::from_env().expect("key is set");
    assert_eq!(client.base_url(), "http://localhost:8080/v1");
    assert_eq!(client.organization(), Some("org-from-env"));

    for (key, value) in saved {
        match value {
            Some(value) => set(key, &value),
            None => unset(key),
        }
    }
}
