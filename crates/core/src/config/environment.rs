//! Target runtime environment for generated TypeScript projects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Runtime a TypeScript package is compiled for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentType {
    Node,
    Browser,
    #[default]
    Other,
}

impl EnvironmentType {
    pub const ALL: [EnvironmentType; 3] = [Self::Node, Self::Browser, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Browser => "browser",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token names no known environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEnvironment(pub String);

impl fmt::Display for UnknownEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = EnvironmentType::ALL.iter().map(|e| e.as_str()).collect();
        write!(
            f,
            "unknown environment {:?}: possible values are {}",
            self.0,
            names.join("/")
        )
    }
}

impl FromStr for EnvironmentType {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| UnknownEnvironment(s.to_string()))
    }
}
