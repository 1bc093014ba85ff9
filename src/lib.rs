//! Remote-control client pieces for terminal emulator profiles.
//!
//! - [`termremote_profile`]: profile enumerations and the write-only change set
//! - [`termremote_color`]: color values and their channel mappings
//! - [`writer`]: request payloads and the [`ProfileWriter`] seam that applies
//!   staged changes
//! - [`cli`] / [`debug`]: the `termremote` binary's argument handling and logging

pub mod cli;
pub mod debug;
pub mod writer;

pub use termremote_color as color;
pub use termremote_profile as profile;

pub use termremote_profile::{
    LocalWriteOnlyProfile, PendingChanges, ProfileError, ProfileGuid, TitleComponents,
};
pub use writer::{
    MemoryProfileStore, ProfileWriter, PropertyAssignment, SetProfilePropertyRequest,
    StoredProfile, assignments,
};
