use semver::Version;
use shiplane_core::BumpType;

use crate::error::VersionError;

/// Parse an app marketing version.
///
/// Xcode projects commonly carry `1.2` or even `3` as the marketing version,
/// so missing minor and patch components are read as zero.
///
/// # Errors
///
/// Returns [`VersionError::InvalidVersion`] if a component is not a number or
/// there are more than three components.
pub fn parse_marketing_version(raw: &str) -> Result<Version, VersionError> {
    let trimmed = raw.trim();
    let invalid = || VersionError::InvalidVersion(raw.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() > 3 {
        return Err(invalid());
    }

    let mut numbers = [0_u64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| invalid())?;
    }

    Ok(Version::new(numbers[0], numbers[1], numbers[2]))
}

pub fn bump_version(version: &Version, bump_type: BumpType) -> Version {
    let mut new_version = version.clone();

    match bump_type {
        BumpType::Major => {
            new_version.major += 1;
            new_version.minor = 0;
            new_version.patch = 0;
        }
        BumpType::Minor => {
            new_version.minor += 1;
            new_version.patch = 0;
        }
        BumpType::Patch => {
            new_version.patch += 1;
        }
    }

    new_version
}

/// Increment the last numeric component of a build number.
///
/// # Errors
///
/// Returns [`VersionError::InvalidBuildNumber`] if any component is not a number.
pub fn next_build_number(current: &str) -> Result<String, VersionError> {
    let invalid = || VersionError::InvalidBuildNumber(current.to_string());
    let trimmed = current.trim();

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let mut parts = trimmed
        .split('.')
        .map(|part| part.parse::<u64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(last) = parts.last_mut() {
        *last += 1;
    }

    Ok(parts
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("."))
}
