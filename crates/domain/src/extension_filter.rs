use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Extension;

/// Client-side view restriction over the full record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ExtensionFilter {
    pub const ALL: [ExtensionFilter; 3] = [
        ExtensionFilter::All,
        ExtensionFilter::Active,
        ExtensionFilter::Inactive,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            ExtensionFilter::All => "all",
            ExtensionFilter::Active => "active",
            ExtensionFilter::Inactive => "inactive",
        }
    }

    pub fn matches(&self, extension: &Extension) -> bool {
        match self {
            ExtensionFilter::All => true,
            ExtensionFilter::Active => extension.is_active,
            ExtensionFilter::Inactive => !extension.is_active,
        }
    }

    pub fn apply<'a>(&self, extensions: &'a [Extension]) -> Vec<&'a Extension> {
        extensions.iter().filter(|e| self.matches(e)).collect()
    }
}

impl FromStr for ExtensionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(ExtensionFilter::All),
            "active" => Ok(ExtensionFilter::Active),
            "inactive" => Ok(ExtensionFilter::Inactive),
            other => Err(format!(
                "Invalid filter '{}': must be 'all', 'active' or 'inactive'",
                other
            )),
        }
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
