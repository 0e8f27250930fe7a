//! Identifier newtypes for records owned by the scheduling API.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Parse an ID from its decimal string form (as used by `<select>` values).
            pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
                Ok(Self(s.trim().parse()?))
            }

            /// Parse an optional selection, where an empty value means "none".
            pub fn parse_optional(s: &str) -> Option<Self> {
                if s.trim().is_empty() {
                    None
                } else {
                    Self::parse(s).ok()
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a scheduled job.
    JobId
);
define_id!(
    /// Unique identifier for an index.
    IndexId
);
define_id!(
    /// Unique identifier for a team member.
    TeamMemberId
);
define_id!(
    /// Unique identifier for a dashboard time slot.
    TimeSlotId
);
define_id!(
    /// Unique identifier for a company.
    CompanyId
);
define_id!(
    /// Unique identifier for a task group.
    TaskGroupId
);
define_id!(
    /// Unique identifier for a single task.
    TaskId
);
define_id!(
    /// Unique identifier for a sign-off record.
    SignOffId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_optional_treats_blank_as_none() {
        assert_eq!(TeamMemberId::parse_optional(""), None);
        assert_eq!(TeamMemberId::parse_optional("  "), None);
        assert_eq!(TeamMemberId::parse_optional("7"), Some(TeamMemberId(7)));
        assert_eq!(TeamMemberId::parse_optional("seven"), None);
    }

    #[test]
    fn ids_serialize_as_bare_integers() {
        let json = serde_json::to_string(&JobId(42)).unwrap();
        assert_eq!(json, "42");
        let back: IndexId = serde_json::from_str("3").unwrap();
        assert_eq!(back, IndexId(3));
    }
}
