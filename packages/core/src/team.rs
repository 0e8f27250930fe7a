//! Team member domain types.

use serde::{Deserialize, Serialize};

use crate::TeamMemberId;
use crate::error::{ValidationError, require};

/// A person who can be assigned jobs and sign off task groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub email: String,
    /// Linked login account, if any.
    #[serde(default)]
    pub user: Option<i64>,
}

/// Add/edit form fields for a team member. Also the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberForm {
    pub name: String,
    pub email: String,
}

impl TeamMemberForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "Name")?;
        require(&self.email, "Email")?;
        if looks_like_email(self.email.trim()) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

impl From<&TeamMember> for TeamMemberForm {
    fn from(member: &TeamMember) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
        }
    }
}

/// Same shape check a browser applies to `<input type="email">`.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
