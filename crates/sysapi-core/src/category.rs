//! Display categories for registered API schemas.
//!
//! Every schema name maps to exactly one `Category`. Categories serialize as
//! their display tag (`"Docker"`, `"VM"`, `"AsyncOperations"`, ...), which is
//! also the key used when schemas are grouped for documentation UIs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Functional domain a schema belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Common,
    Docker,
    System,
    Storage,
    #[serde(rename = "VM")]
    Vm,
    WebSocket,
    Auth,
    Diagnostics,
    Notifications,
    Operations,
    AsyncOperations,
    RateLimiting,
    Errors,
    Responses,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 14] = [
        Self::Common,
        Self::Docker,
        Self::System,
        Self::Storage,
        Self::Vm,
        Self::WebSocket,
        Self::Auth,
        Self::Diagnostics,
        Self::Notifications,
        Self::Operations,
        Self::AsyncOperations,
        Self::RateLimiting,
        Self::Errors,
        Self::Responses,
    ];

    /// Order in which the static name lists are consulted when classifying.
    ///
    /// `Responses` is checked before `AsyncOperations`, `RateLimiting` and
    /// `Errors`; the first list containing a name decides its category.
    pub const PRIORITY: [Self; 14] = [
        Self::Common,
        Self::Docker,
        Self::System,
        Self::Storage,
        Self::Vm,
        Self::WebSocket,
        Self::Auth,
        Self::Diagnostics,
        Self::Notifications,
        Self::Operations,
        Self::Responses,
        Self::AsyncOperations,
        Self::RateLimiting,
        Self::Errors,
    ];

    /// Bucket for names that no static list claims.
    pub const DEFAULT: Self = Self::Responses;

    /// Return the display tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Docker => "Docker",
            Self::System => "System",
            Self::Storage => "Storage",
            Self::Vm => "VM",
            Self::WebSocket => "WebSocket",
            Self::Auth => "Auth",
            Self::Diagnostics => "Diagnostics",
            Self::Notifications => "Notifications",
            Self::Operations => "Operations",
            Self::AsyncOperations => "AsyncOperations",
            Self::RateLimiting => "RateLimiting",
            Self::Errors => "Errors",
            Self::Responses => "Responses",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses display tags case-insensitively. `snake_case` and `kebab-case`
/// spellings (`async_operations`, `rate-limiting`) are accepted too.
impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '_' | '-' | ' '))
            .map(|ch| ch.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Category::Vm, "VM")]
    #[case(Category::WebSocket, "WebSocket")]
    #[case(Category::AsyncOperations, "AsyncOperations")]
    #[case(Category::RateLimiting, "RateLimiting")]
    #[case(Category::Responses, "Responses")]
    fn serializes_as_display_tag(#[case] category: Category, #[case] tag: &str) {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{tag}\""));
        assert_eq!(category.to_string(), tag);
        let recovered: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, category);
    }

    #[rstest]
    #[case("docker", Category::Docker)]
    #[case("vm", Category::Vm)]
    #[case("VM", Category::Vm)]
    #[case("async_operations", Category::AsyncOperations)]
    #[case("rate-limiting", Category::RateLimiting)]
    #[case("WebSocket", Category::WebSocket)]
    #[case("  errors ", Category::Errors)]
    fn parses_loose_spellings(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(input.parse::<Category>().unwrap(), expected);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            "billing".parse::<Category>(),
            Err(CoreError::UnknownCategory("billing".into()))
        );
    }

    #[test]
    fn all_and_priority_cover_the_same_fourteen_categories() {
        let all: HashSet<_> = Category::ALL.into_iter().collect();
        let priority: HashSet<_> = Category::PRIORITY.into_iter().collect();
        assert_eq!(all.len(), 14);
        assert_eq!(all, priority);
        assert!(all.contains(&Category::DEFAULT));
    }

    #[test]
    fn responses_precedes_async_operations_in_priority() {
        let pos = |c: Category| Category::PRIORITY.iter().position(|p| *p == c).unwrap();
        assert!(pos(Category::Responses) < pos(Category::AsyncOperations));
        assert!(pos(Category::Operations) < pos(Category::Responses));
        assert_eq!(Category::PRIORITY[13], Category::Errors);
    }
}
