use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a name/title query matches the display field. An enum rather than
/// a boolean so further modes can be added without touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Exact match on the display field.
    Strict,
    /// Substring match on the display field, results sorted ascending.
    Default,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Strict => "strict",
            SearchMode::Default => "default",
        }
    }
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Default
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for SearchMode {
    fn from(s: &str) -> Self {
        // Only the exact string "strict" selects strict matching.
        match s {
            "strict" => SearchMode::Strict,
            _ => SearchMode::Default,
        }
    }
}

impl From<String> for SearchMode {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl FromStr for SearchMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_string_strict_is_strict() {
        assert_eq!(SearchMode::from("strict"), SearchMode::Strict);
        assert_eq!(SearchMode::from("STRICT"), SearchMode::Default);
        assert_eq!(SearchMode::from("Strict"), SearchMode::Default);
    }

    #[test]
    fn anything_else_falls_back_to_default() {
        assert_eq!(SearchMode::from(""), SearchMode::Default);
        assert_eq!(SearchMode::from("fuzzy"), SearchMode::Default);
        assert_eq!(SearchMode::default(), SearchMode::Default);
    }
}
