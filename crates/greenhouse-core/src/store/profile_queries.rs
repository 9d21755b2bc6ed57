//! Caretaker profile operations.

use jiff::Timestamp;
use log::info;

use crate::{
    error::Result,
    models::{profile_color_for, Profile},
    params::CreateProfile,
};

impl super::Store {
    /// Lists all profiles in creation order.
    pub fn list_profiles(&self) -> Result<Vec<Profile>> {
        Ok(self.load()?.profiles)
    }

    /// Creates a profile. Without an explicit color the next palette color
    /// is used.
    pub fn create_profile(&self, params: CreateProfile) -> Result<Profile> {
        params.validate()?;

        let profile = self.update(|snapshot| {
            let color = params
                .color
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| profile_color_for(snapshot.profiles.len()).to_string());

            let profile = Profile {
                id: super::next_id(snapshot.profiles.iter().map(|p| p.id)),
                name: params.name.trim().to_string(),
                color,
                created_at: Some(Timestamp::now()),
            };
            snapshot.profiles.push(profile.clone());
            Ok(profile)
        })?;

        info!("Created profile {} ({})", profile.id, profile.name);
        Ok(profile)
    }
}
