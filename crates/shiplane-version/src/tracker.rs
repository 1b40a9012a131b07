//! Process-lifetime cache of the app version before and after the run.
//!
//! The tracker owns two slots. `Current` is read before any lane runs and
//! `Next` after the version-update lane has changed the project. Once a
//! slot holds a version and a build number it is never read again, even if
//! the project metadata changes afterwards.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionSlot {
    Current,
    Next,
}

impl fmt::Display for VersionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("current"),
            Self::Next => f.write_str("next"),
        }
    }
}

/// A version and build number pair at one point in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    slot: VersionSlot,
    pub version: String,
    pub build_number: String,
}

impl VersionInfo {
    #[must_use]
    pub fn empty(slot: VersionSlot) -> Self {
        Self {
            slot,
            version: String::new(),
            build_number: String::new(),
        }
    }

    #[must_use]
    pub fn slot(&self) -> VersionSlot {
        self.slot
    }

    /// True when either the version or the build number is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.version.is_empty() || self.build_number.is_empty()
    }

    /// `1.2.0(7)`, or an empty string while the snapshot is empty.
    #[must_use]
    pub fn text(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{}({})", self.version, self.build_number)
        }
    }

    /// `1.2.0_7`, or an empty string while the snapshot is empty.
    #[must_use]
    pub fn include_build_number_text(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{}_{}", self.version, self.build_number)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppVersion {
    current: VersionInfo,
    next: VersionInfo,
}

impl Default for AppVersion {
    fn default() -> Self {
        Self::new()
    }
}

impl AppVersion {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: VersionInfo::empty(VersionSlot::Current),
            next: VersionInfo::empty(VersionSlot::Next),
        }
    }

    #[must_use]
    pub fn current(&self) -> &VersionInfo {
        &self.current
    }

    #[must_use]
    pub fn next(&self) -> &VersionInfo {
        &self.next
    }

    #[must_use]
    pub fn slot(&self, slot: VersionSlot) -> &VersionInfo {
        match slot {
            VersionSlot::Current => &self.current,
            VersionSlot::Next => &self.next,
        }
    }

    /// Populate a slot if it is still empty.
    ///
    /// `read` returns the `(version, build_number)` pair from the project and
    /// is only called while the slot is empty.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `read`; the slot is left untouched.
    pub fn update<E, F>(&mut self, slot: VersionSlot, read: F) -> Result<&VersionInfo, E>
    where
        F: FnOnce() -> Result<(String, String), E>,
    {
        let info = match slot {
            VersionSlot::Current => &mut self.current,
            VersionSlot::Next => &mut self.next,
        };

        if info.is_empty() {
            let (version, build_number) = read()?;
            info.version = version;
            info.build_number = build_number;
        }

        Ok(info)
    }

    /// Populate a slot if needed and return a copy of it.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `read`.
    pub fn fetch<E, F>(&mut self, slot: VersionSlot, read: F) -> Result<VersionInfo, E>
    where
        F: FnOnce() -> Result<(String, String), E>,
    {
        self.update(slot, read).cloned()
    }

    /// Whether the version or the build number differs between the slots.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.current.version != self.next.version
            || self.current.build_number != self.next.build_number
    }
}
