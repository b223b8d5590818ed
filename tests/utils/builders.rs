#![allow(dead_code)] // Test utilities may not all be used in every test

use campus_leaderboard::Profile;

// ============================================================================
// Profile Setup Utilities
// ============================================================================

pub struct ProfileBuilder {
    profile: Profile,
}

impl ProfileBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            profile: Profile {
                id: id.to_string(),
                display_name: Some(id.to_string()),
                ..Profile::default()
            },
        }
    }

    pub fn named(mut self, display_name: &str) -> Self {
        self.profile.display_name = Some(display_name.to_string());
        self
    }

    pub fn organization(mut self, organization: &str) -> Self {
        self.profile.organization = Some(organization.to_string());
        self
    }

    pub fn practice_username(mut self, username: &str) -> Self {
        self.profile.practice_username = Some(username.to_string());
        self
    }

    pub fn cached_solved(mut self, count: u32) -> Self {
        self.profile.cached_solved_count = Some(count);
        self
    }

    pub fn stored_points(mut self, points: u32) -> Self {
        self.profile.stored_points = Some(points);
        self
    }

    pub fn streak(mut self, streak_count: u32) -> Self {
        self.profile.streak_count = streak_count;
        self
    }

    pub fn build(self) -> Profile {
        self.profile
    }
}
