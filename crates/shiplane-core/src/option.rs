use indexmap::IndexMap;

use crate::error::{Result, ShiplaneError};

/// Raw lane options as typed on the command line (`key:value`).
pub type Options = IndexMap<String, String>;

/// An enumerated lane option resolved leniently from an [`Options`] map.
///
/// Every implementor declares the option key it is read from and a table
/// of the accepted names. Matching is case-insensitive and the first entry
/// wins. Anything that does not match resolves to `None` so the caller can
/// fall back to its default.
pub trait LaneOption: Copy + Sized + 'static {
    /// Key looked up in the options map.
    const KEY: &'static str;

    /// Accepted names, in declaration order.
    const VARIANTS: &'static [(&'static str, Self)];

    /// Resolve the option from a raw options map.
    ///
    /// A missing map, a missing key or an unrecognized value all yield `None`.
    #[must_use]
    fn from_options(options: Option<&Options>) -> Option<Self> {
        let value = options?.get(Self::KEY)?;
        Self::from_name(value)
    }

    /// Match a single raw value against the declared names.
    #[must_use]
    fn from_name(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|(_, variant)| *variant)
    }
}

/// Split a `key:value` command line argument at the first colon.
///
/// # Errors
///
/// Returns an error if the argument has no colon or the key is empty.
pub fn parse_option_pair(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once(':')
        .ok_or_else(|| ShiplaneError::InvalidOptionPair(raw.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ShiplaneError::EmptyOptionKey(raw.to_string()));
    }

    Ok((key.to_string(), value.trim().to_string()))
}
