use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod message;

/// Conversational topic a user message is classified into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Greeting,
    Services,
    Projects,
    Contact,
    Pricing,
    Experience,
    Default,
}

impl Category {
    /// Order in which keyword rules are evaluated. The first category whose keywords
    /// match wins, `Default` is the fallback and always comes last.
    pub const PRIORITY: [Category; 7] = [
        Category::Services,
        Category::Projects,
        Category::Contact,
        Category::Pricing,
        Category::Experience,
        Category::Greeting,
        Category::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Services => "services",
            Category::Projects => "projects",
            Category::Contact => "contact",
            Category::Pricing => "pricing",
            Category::Experience => "experience",
            Category::Default => "default",
        }
    }

    /// Position of this category in [`Category::PRIORITY`].
    pub fn priority_rank(&self) -> usize {
        match self {
            Category::Services => 0,
            Category::Projects => 1,
            Category::Contact => 2,
            Category::Pricing => 3,
            Category::Experience => 4,
            Category::Greeting => 5,
            Category::Default => 6,
        }
    }

    /// The fallback category has no trigger keywords.
    pub fn is_fallback(&self) -> bool {
        *self == Category::Default
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid category: {0}")]
pub struct FromStrError(String);

impl FromStr for Category {
    type Err = FromStrError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::try_from(value)
    }
}

impl TryFrom<&str> for Category {
    type Error = FromStrError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "greeting" => Ok(Category::Greeting),
            "services" => Ok(Category::Services),
            "projects" => Ok(Category::Projects),
            "contact" => Ok(Category::Contact),
            "pricing" => Ok(Category::Pricing),
            "experience" => Ok(Category::Experience),
            "default" => Ok(Category::Default),
            _ => Err(FromStrError(value.to_string())),
        }
    }
}
