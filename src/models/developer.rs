//! Developer model.
//!
//! Developers are the people whose bandwidth is allocated to projects.
//! Skills are free-text tags; matching against them is done by the
//! skill-match query, not here.

use serde::{Deserialize, Serialize};

/// A team member that can be allocated to projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    /// Unique developer identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email (unique within a snapshot).
    pub email: String,
    /// Skill tags, in the order they were entered.
    pub skills: Vec<String>,
    /// Avatar reference (URL or asset key).
    pub avatar: Option<String>,
}

impl Developer {
    /// Creates a developer with no skills.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            skills: Vec::new(),
            avatar: None,
        }
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Adds a skill tag.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Adds several skill tags.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    /// Sets the avatar reference.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
