use std::fmt;

use crate::option::LaneOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        };
        write!(f, "{s}")
    }
}

/// How the version-update lane changes the project version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionUpdateType {
    Patch,
    Minor,
    Major,
    Build,
    None,
}

impl VersionUpdateType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Build => "build",
            Self::None => "none",
        }
    }

    /// The semantic version component to bump, if this update touches the
    /// marketing version at all.
    #[must_use]
    pub fn bump_type(self) -> Option<BumpType> {
        match self {
            Self::Patch => Some(BumpType::Patch),
            Self::Minor => Some(BumpType::Minor),
            Self::Major => Some(BumpType::Major),
            Self::Build | Self::None => None,
        }
    }
}

impl LaneOption for VersionUpdateType {
    const KEY: &'static str = "version_update_type";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("patch", Self::Patch),
        ("minor", Self::Minor),
        ("major", Self::Major),
        ("build", Self::Build),
        ("none", Self::None),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildConfiguration {
    #[default]
    Release,
    Debug,
}

impl BuildConfiguration {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Release => "Release",
            Self::Debug => "Debug",
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LaneOption for BuildConfiguration {
    const KEY: &'static str = "build_configuration";
    const VARIANTS: &'static [(&'static str, Self)] =
        &[("Release", Self::Release), ("Debug", Self::Debug)];
}

/// Where the built binary goes after the build lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadType {
    /// Full App Store submission, including review submission.
    Appstore,
    /// TestFlight beta distribution.
    Testflight,
    /// TestFlight upload without submitting the build to testers.
    UploadOnly,
    None,
}

impl UploadType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Appstore => "appstore",
            Self::Testflight => "testflight",
            Self::UploadOnly => "uploadOnly",
            Self::None => "none",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Appstore => "App Store",
            Self::Testflight => "TestFlight",
            Self::UploadOnly => "Build",
            Self::None => "",
        }
    }

    /// Chat message announcing a successful upload. Empty for `none`.
    #[must_use]
    pub fn success_message(self) -> String {
        match self.display_name() {
            "" => String::new(),
            name => format!("{name} submission succeeded!"),
        }
    }

    /// Chat message announcing a failed run. Empty for `none`.
    #[must_use]
    pub fn failure_message(self) -> String {
        match self.display_name() {
            "" => String::new(),
            name => format!("{name} submission failed..."),
        }
    }
}

impl fmt::Display for UploadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LaneOption for UploadType {
    const KEY: &'static str = "upload_type";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("appstore", Self::Appstore),
        ("testflight", Self::Testflight),
        ("uploadOnly", Self::UploadOnly),
        ("none", Self::None),
    ];
}

/// Which App Store Connect builds to fetch debug symbols for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DsymUploadType {
    /// The most recent build uploaded to App Store Connect.
    #[default]
    Latest,
    /// The build currently live on the App Store.
    Live,
    All,
    None,
}

impl DsymUploadType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Live => "live",
            Self::All => "all",
            Self::None => "none",
        }
    }

    /// Version filter passed to the symbol download. `None` means every version.
    #[must_use]
    pub fn version_filter(self) -> Option<&'static str> {
        match self {
            Self::Latest => Some("latest"),
            Self::Live => Some("live"),
            Self::All | Self::None => None,
        }
    }
}

impl LaneOption for DsymUploadType {
    const KEY: &'static str = "dsym_upload_type";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("latest", Self::Latest),
        ("live", Self::Live),
        ("all", Self::All),
        ("none", Self::None),
    ];
}
