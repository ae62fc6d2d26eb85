use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Validated player name (trimmed, non-empty, at most 20 characters).
///
/// Validation lives here in the constructor so no consumer can store an
/// overlong or blank name; the progress store accepts the type as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// Maximum visible length accepted by the name form.
    pub const MAX_LENGTH: usize = 20;

    /// Create a validated player name.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` if the name is empty after
    /// trimming, or `ProfileError::NameTooLong` if it exceeds
    /// [`PlayerName::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ProfileError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(ProfileError::NameTooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse difficulty tier chosen once per player.
///
/// Ordering matters: trials tagged with a minimum tier are visible to that
/// tier and every tier above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Young,
    Middle,
    Older,
}

impl AgeGroup {
    /// Every tier, youngest first.
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Young, AgeGroup::Middle, AgeGroup::Older];

    /// Stable slug used in persisted data.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            AgeGroup::Young => "young",
            AgeGroup::Middle => "middle",
            AgeGroup::Older => "older",
        }
    }

    /// Age range shown on the tier picker.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Young => "Ages 5-7",
            AgeGroup::Middle => "Ages 8-10",
            AgeGroup::Older => "Ages 11+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for AgeGroup {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeGroup::ALL
            .into_iter()
            .find(|tier| tier.slug() == s)
            .ok_or_else(|| ProfileError::UnknownAgeGroup { raw: s.to_string() })
    }
}

/// Who is playing: an optional name and an optional age tier.
///
/// Both start unset on first launch; the welcome screen fills them in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerProfile {
    name: Option<PlayerName>,
    age_group: Option<AgeGroup>,
}

impl PlayerProfile {
    #[must_use]
    pub fn new(name: Option<PlayerName>, age_group: Option<AgeGroup>) -> Self {
        Self { name, age_group }
    }

    #[must_use]
    pub fn name(&self) -> Option<&PlayerName> {
        self.name.as_ref()
    }

    #[must_use]
    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age_group
    }

    /// Overwrite the stored name; `None` clears it.
    pub fn set_name(&mut self, name: Option<PlayerName>) {
        self.name = name;
    }

    /// Overwrite the stored tier; `None` returns the profile to unset.
    pub fn set_age_group(&mut self, age_group: Option<AgeGroup>) {
        self.age_group = age_group;
    }
}

/// Validation errors for profile fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("player name must not be empty")]
    EmptyName,
    #[error("player name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("unknown age group slug: {raw}")]
    UnknownAgeGroup { raw: String },
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
