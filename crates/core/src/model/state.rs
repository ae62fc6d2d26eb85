use chrono::{DateTime, Utc};

use crate::model::{PlayerProfile, ProgressRecord};

/// The whole persisted blob: who is playing, how far they have come, and
/// the sound toggle. One global instance per install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    profile: PlayerProfile,
    progress: ProgressRecord,
    sound_enabled: bool,
    updated_at: DateTime<Utc>,
}

impl PlayerState {
    /// A first-launch state: unset profile, fresh progress, sound on.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            profile: PlayerProfile::default(),
            progress: ProgressRecord::new(),
            sound_enabled: true,
            updated_at: now,
        }
    }

    /// Reassemble a state from persisted parts. The parts validate
    /// themselves; nothing further is checked here.
    #[must_use]
    pub fn from_persisted(
        profile: PlayerProfile,
        progress: ProgressRecord,
        sound_enabled: bool,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            profile,
            progress,
            sound_enabled,
            updated_at,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut PlayerProfile {
        &mut self.profile
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressRecord {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressRecord {
        &mut self.progress
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Stamp the state as touched at `now`. Every store operation calls
    /// this before persisting.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn test_new_state_defaults() {
        let state = PlayerState::new(fixed_now());
        assert!(state.profile().name().is_none());
        assert!(state.profile().age_group().is_none());
        assert!(state.sound_enabled());
        assert_eq!(state.progress().total_stars(), 0);
        assert_eq!(state.updated_at(), fixed_now());
    }

    #[test]
    fn test_touch_updates_timestamp_only() {
        let mut state = PlayerState::new(fixed_now());
        let later = fixed_now() + chrono::Duration::seconds(90);
        state.touch(later);
        assert_eq!(state.updated_at(), later);
        assert_eq!(state.progress(), &ProgressRecord::new());
    }
}
