//! HTTP verbs that a route descriptor can be bound to.

use std::fmt;
use std::str::FromStr;

use axum::routing::MethodFilter;
use serde::{Deserialize, Serialize};

/// HTTP verb token.
///
/// Parsed case-insensitively; `del` is accepted as an alias of `delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

/// Returned when a verb token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown HTTP verb `{0}`")]
pub struct VerbParseError(pub String);

impl Verb {
    /// Upper-case wire token (`GET`, `POST`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Head => "HEAD",
            Verb::Options => "OPTIONS",
        }
    }

    /// The axum method filter used when the verb is registered for dispatch.
    pub fn method_filter(&self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Put => MethodFilter::PUT,
            Verb::Patch => MethodFilter::PATCH,
            Verb::Delete => MethodFilter::DELETE,
            Verb::Head => MethodFilter::HEAD,
            Verb::Options => MethodFilter::OPTIONS,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = VerbParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(Verb::Get),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            "patch" => Ok(Verb::Patch),
            "delete" | "del" => Ok(Verb::Delete),
            "head" => Ok(Verb::Head),
            "options" => Ok(Verb::Options),
            _ => Err(VerbParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Verb {
    type Error = VerbParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Verb> for String {
    fn from(verb: Verb) -> Self {
        verb.as_str().to_ascii_lowercase()
    }
}
