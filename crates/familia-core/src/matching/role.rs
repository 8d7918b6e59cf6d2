//! Family roles and the alias-aware role matching rule.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A role a member can offer or seek in a cross-cultural bond.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Mother,
    Father,
    Son,
    Daughter,
    Brother,
    Sister,
    Sibling,
    Grandparent,
    Grandchild,
    Mentor,
    Student,
    Friend,
    Penpal,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mother => "Mother",
            Self::Father => "Father",
            Self::Son => "Son",
            Self::Daughter => "Daughter",
            Self::Brother => "Brother",
            Self::Sister => "Sister",
            Self::Sibling => "Sibling",
            Self::Grandparent => "Grandparent",
            Self::Grandchild => "Grandchild",
            Self::Mentor => "Mentor",
            Self::Student => "Student",
            Self::Friend => "Friend",
            Self::Penpal => "Pen Pal",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Mother => "👩",
            Self::Father => "👨",
            Self::Son => "👦",
            Self::Daughter => "👧",
            Self::Brother => "🧒",
            Self::Sister => "👱‍♀️",
            Self::Sibling => "🧑",
            Self::Grandparent => "👴",
            Self::Grandchild => "🧒",
            Self::Mentor => "🧑‍🏫",
            Self::Student => "🧑‍🎓",
            Self::Friend => "🤝",
            Self::Penpal => "✉️",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Mother => "A nurturing soul from another culture",
            Self::Father => "A guiding presence across borders",
            Self::Son => "An eager learner from far away",
            Self::Daughter => "A curious explorer of cultures",
            Self::Brother => "A brother to share the journey with",
            Self::Sister => "A sister from the other side of the world",
            Self::Sibling => "A companion across the world",
            Self::Grandparent => "Wisdom from another heritage",
            Self::Grandchild => "Youth bridging generations & cultures",
            Self::Mentor => "A guide in a new cultural journey",
            Self::Student => "Ready to learn from another world",
            Self::Friend => "A genuine cross-cultural bond",
            Self::Penpal => "Exchange letters across the globe",
        }
    }
}

/// Normalized form used for every role comparison.
pub fn normalize_role(role: &str) -> String {
    role.trim().to_lowercase()
}

/// Offering roles that also satisfy a request for `requested`, besides itself.
///
/// `requested` must already be normalized. Roles without an entry only
/// match themselves.
pub fn role_aliases(requested: &str) -> &'static [&'static str] {
    match requested {
        "sibling" => &["brother", "sister"],
        "friend" => &["penpal"],
        "penpal" => &["friend"],
        _ => &[],
    }
}

/// Whether a candidate's declared offering role satisfies the requested role.
///
/// Comparison trims whitespace and ignores case. A candidate with no
/// offering role never matches.
///
/// # Examples
///
/// ```
/// use familia_core::matching::offering_matches;
///
/// assert!(offering_matches("sibling", Some(" Brother ")));
/// assert!(!offering_matches("mentor", Some("student")));
/// assert!(!offering_matches("friend", None));
/// ```
pub fn offering_matches(requested: &str, offering: Option<&str>) -> bool {
    let Some(offering) = offering else {
        return false;
    };
    let requested = normalize_role(requested);
    let offering = normalize_role(offering);
    if offering.is_empty() {
        return false;
    }

    offering == requested || role_aliases(&requested).contains(&offering.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_thirteen_roles() {
        assert_eq!(Role::iter().count(), 13);
        assert_eq!(Role::Penpal.to_string(), "penpal");
        assert_eq!(Role::Penpal.label(), "Pen Pal");
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("Mentor".parse::<Role>().unwrap(), Role::Mentor);
        assert_eq!("GRANDPARENT".parse::<Role>().unwrap(), Role::Grandparent);
        assert!("cousin".parse::<Role>().is_err());
    }

    #[test]
    fn test_exact_match() {
        assert!(offering_matches("mentor", Some("mentor")));
        assert!(offering_matches("Mentor", Some("  MENTOR\t")));
    }

    #[test]
    fn test_alias_table() {
        assert!(offering_matches("sibling", Some("brother")));
        assert!(offering_matches("sibling", Some("sister")));
        assert!(offering_matches("friend", Some("penpal")));
        assert!(offering_matches("penpal", Some("friend")));
    }

    #[test]
    fn test_aliases_are_directional() {
        assert!(!offering_matches("brother", Some("sibling")));
        assert!(!offering_matches("sister", Some("sibling")));
        assert!(!offering_matches("brother", Some("sister")));
    }

    #[test]
    fn test_roles_without_alias_only_match_themselves() {
        for role in Role::iter() {
            let requested = role.to_string();
            if !role_aliases(&requested).is_empty() {
                continue;
            }
            for other in Role::iter().filter(|o| *o != role) {
                assert!(
                    !offering_matches(&requested, Some(other.as_ref())),
                    "{} should not match {}",
                    role,
                    other
                );
            }
        }
    }

    #[test]
    fn test_missing_or_blank_offering_never_matches() {
        assert!(!offering_matches("friend", None));
        assert!(!offering_matches("friend", Some("")));
        assert!(!offering_matches("", Some("   ")));
    }
}
