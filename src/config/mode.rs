//! Invocation mode
//!
//! A run either comes from a person at a terminal or from a web server
//! handing over a request. The mode decides which loaders run and whether
//! status lines are printed.

use std::env;

/// Environment variable carrying the request query string
pub const QUERY_STRING_VAR: &str = "QUERY_STRING";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationMode {
    /// Started from a shell; command-line options apply
    Interactive,
    /// Serving a request; the query string applies, untrusted
    RequestServing { query: String },
}

impl InvocationMode {
    /// Request-serving when a query string is present, even an empty one.
    pub fn from_query_string(query: Option<String>) -> Self {
        match query {
            Some(query) => InvocationMode::RequestServing { query },
            None => InvocationMode::Interactive,
        }
    }

    /// Detect the mode from the process environment.
    pub fn from_env() -> Self {
        Self::from_query_string(
            env::var_os(QUERY_STRING_VAR).map(|value| value.to_string_lossy().into_owned()),
        )
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, InvocationMode::Interactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_query_is_interactive() {
        assert_eq!(InvocationMode::from_query_string(None), InvocationMode::Interactive);
        assert!(InvocationMode::Interactive.is_interactive());
    }

    #[test]
    fn test_empty_query_still_serves_requests() {
        let mode = InvocationMode::from_query_string(Some(String::new()));
        assert_eq!(
            mode,
            InvocationMode::RequestServing {
                query: String::new()
            }
        );
        assert!(!mode.is_interactive());
    }
}
