//! Applying staged profile changes.
//!
//! [`LocalWriteOnlyProfile`] only records what should change. A
//! [`ProfileWriter`] takes those encoded changes and applies them to real
//! profiles: over an RPC connection to the host, or in-process through
//! [`MemoryProfileStore`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use termremote_profile::{
    LocalWriteOnlyProfile, PendingChanges, ProfileError, ProfileGuid, Result,
};
use uuid::Uuid;

// ============================================================================
// Request payload
// ============================================================================

/// One staged assignment in the shape the host expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAssignment {
    /// Profile field name
    pub key: String,
    /// Field value as JSON text
    pub json_value: String,
}

/// Flatten staged changes into assignments, in key order.
pub fn assignments(changes: &PendingChanges) -> Vec<PropertyAssignment> {
    changes
        .iter()
        .map(|(key, json_value)| PropertyAssignment {
            key: key.clone(),
            json_value: json_value.clone(),
        })
        .collect()
}

/// Body of a "set profile property" request covering one or more profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetProfilePropertyRequest {
    /// Profiles to update; empty means the caller's current session profile
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guids: Vec<ProfileGuid>,
    pub assignments: Vec<PropertyAssignment>,
}

impl SetProfilePropertyRequest {
    pub fn new(guids: Vec<ProfileGuid>, profile: &LocalWriteOnlyProfile) -> Self {
        Self {
            guids,
            assignments: assignments(profile.values()),
        }
    }
}

// ============================================================================
// Writer seam
// ============================================================================

/// Something that can apply encoded profile changes.
pub trait ProfileWriter {
    /// Apply every change in `changes` to the profile named by `guid`.
    ///
    /// Returns [`ProfileError::BadReference`] if no such profile exists.
    fn write_properties(&mut self, guid: &ProfileGuid, changes: &PendingChanges) -> Result<()>;

    /// Apply everything staged in `profile`
    fn apply(&mut self, guid: &ProfileGuid, profile: &LocalWriteOnlyProfile) -> Result<()> {
        self.write_properties(guid, profile.values())
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Decoded properties of one profile
pub type StoredProfile = BTreeMap<String, Value>;

/// Profiles held in-process, keyed by guid.
///
/// Useful for tests and for previewing what a change set will do before it
/// is sent to a live host.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: HashMap<ProfileGuid, StoredProfile>,
    order: Vec<ProfileGuid>,
}

impl MemoryProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profile with a freshly generated guid and the given name
    pub fn create(&mut self, name: &str) -> Result<ProfileGuid> {
        let guid = ProfileGuid::parse(&Uuid::new_v4().to_string().to_uppercase())?;
        let mut properties = StoredProfile::new();
        properties.insert(termremote_profile::keys::NAME.to_string(), Value::from(name));
        self.insert(guid.clone(), properties);
        Ok(guid)
    }

    /// Add or replace a profile
    pub fn insert(&mut self, guid: ProfileGuid, properties: StoredProfile) {
        if !self.order.contains(&guid) {
            self.order.push(guid.clone());
        }
        self.profiles.insert(guid, properties);
    }

    /// Remove a profile by guid
    pub fn remove(&mut self, guid: &ProfileGuid) -> Option<StoredProfile> {
        self.order.retain(|g| g != guid);
        self.profiles.remove(guid)
    }

    /// Get a profile by guid
    pub fn get(&self, guid: &ProfileGuid) -> Option<&StoredProfile> {
        self.profiles.get(guid)
    }

    /// Read a single decoded property
    pub fn property(&self, guid: &ProfileGuid, key: &str) -> Result<Option<&Value>> {
        let profile = self
            .profiles
            .get(guid)
            .ok_or_else(|| unknown_guid(guid))?;
        Ok(profile.get(key))
    }

    /// Get all guids in insertion order
    pub fn guids(&self) -> impl Iterator<Item = &ProfileGuid> {
        self.order.iter()
    }

    /// Get the number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if there are no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileWriter for MemoryProfileStore {
    /// All changes are decoded before any is applied, so a malformed entry
    /// leaves the profile untouched.
    fn write_properties(&mut self, guid: &ProfileGuid, changes: &PendingChanges) -> Result<()> {
        let profile = self
            .profiles
            .get_mut(guid)
            .ok_or_else(|| unknown_guid(guid))?;

        let decoded = changes
            .iter()
            .map(|(key, json)| -> Result<(String, Value)> {
                Ok((key.clone(), serde_json::from_str(json)?))
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Applying {} change(s) to profile {guid}", decoded.len());
        for (key, value) in decoded {
            log::trace!("{guid}: {key} = {value}");
            profile.insert(key, value);
        }
        Ok(())
    }
}

fn unknown_guid(guid: &ProfileGuid) -> ProfileError {
    ProfileError::BadReference(format!("no profile with guid {guid}"))
}
