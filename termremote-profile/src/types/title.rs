//! Title component flags.

use bitflags::bitflags;

bitflags! {
    /// Elements shown in a session's title bar.
    ///
    /// `CUSTOM` is meant to be used alone: when it is set the title comes
    /// from the registered title function and the other flags should be
    /// clear. This is not enforced anywhere; a combination is encoded as
    /// given and the host decides what to make of it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TitleComponents: u32 {
        /// Session name
        const SESSION_NAME = 1 << 0;
        /// Foreground job name
        const JOB = 1 << 1;
        /// Current working directory
        const WORKING_DIRECTORY = 1 << 2;
        /// TTY device name
        const TTY = 1 << 3;
        /// Output of the registered title function
        const CUSTOM = 1 << 4;
        /// Profile name
        const PROFILE_NAME = 1 << 5;
        /// Profile name followed by session name
        const PROFILE_AND_SESSION_NAME = 1 << 6;
        /// User name
        const USER = 1 << 7;
        /// Host name
        const HOST = 1 << 8;
    }
}

impl TitleComponents {
    /// Parse a kebab-case component name (`"session-name"`, `"job"`, ...).
    ///
    /// Case and `_` versus `-` are ignored. The exact-match
    /// [`from_name`](Self::from_name) generated by `bitflags` only accepts
    /// the upper-case constant names.
    pub fn from_kebab_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "session-name" => Some(Self::SESSION_NAME),
            "job" => Some(Self::JOB),
            "working-directory" | "cwd" => Some(Self::WORKING_DIRECTORY),
            "tty" => Some(Self::TTY),
            "custom" => Some(Self::CUSTOM),
            "profile-name" => Some(Self::PROFILE_NAME),
            "profile-and-session-name" => Some(Self::PROFILE_AND_SESSION_NAME),
            "user" => Some(Self::USER),
            "host" => Some(Self::HOST),
            _ => None,
        }
    }

    /// True when `CUSTOM` is combined with any other component
    pub fn has_conflicting_custom(&self) -> bool {
        self.contains(Self::CUSTOM) && *self != Self::CUSTOM
    }
}
