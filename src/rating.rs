//! Rating of computed patterns against requested visual patterns
//!
//! A requested pattern names, per tile position, the mode group the tile should
//! fall into. The rating is dominated by the count of positions whose color
//! lands in the requested group (10 points each); positions that match also
//! earn `max(0, 2 - offset)` for the color's rank within its group, so a
//! pattern matching the requested layout always outranks a near-miss, and
//! among layout-equal candidates the earlier-listed colors win.

use crate::core::Pattern;
use crate::mode::Mode;
use std::fmt;

/// Highest group index a requested pattern may name (three colors, so at most
/// three groups)
pub const MAX_GROUP: u8 = 2;

/// A requested visual layout: one group index per tile position
///
/// Mode-agnostic data; it only gains meaning combined with a [`Mode`].
/// Construction validates length and the group-index domain, so ratings over
/// a `RequestedPattern` are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedPattern([u8; 5]);

/// Error type for invalid requested patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    InvalidLength(usize),
    GroupOutOfRange(u8),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Requested pattern must have exactly 5 entries, got {len}")
            }
            Self::GroupOutOfRange(value) => {
                write!(f, "Group index {value} is out of range (max {MAX_GROUP})")
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestedPattern {
    /// Create a requested pattern from group indices
    ///
    /// # Errors
    /// Returns `RequestError` if the slice is not exactly 5 entries or any
    /// entry exceeds [`MAX_GROUP`].
    ///
    /// # Examples
    /// ```
    /// use wordraw::rating::RequestedPattern;
    ///
    /// let requested = RequestedPattern::new(&[0, 1, 1, 1, 0]).unwrap();
    /// assert_eq!(requested.groups(), &[0, 1, 1, 1, 0]);
    ///
    /// assert!(RequestedPattern::new(&[0, 1, 2]).is_err());
    /// assert!(RequestedPattern::new(&[0, 1, 2, 3, 0]).is_err());
    /// ```
    pub fn new(groups: &[u8]) -> Result<Self, RequestError> {
        let groups: [u8; 5] = groups
            .try_into()
            .map_err(|_| RequestError::InvalidLength(groups.len()))?;

        if let Some(&value) = groups.iter().find(|&&g| g > MAX_GROUP) {
            return Err(RequestError::GroupOutOfRange(value));
        }

        Ok(Self(groups))
    }

    /// The requested group index per position
    #[inline]
    #[must_use]
    pub const fn groups(&self) -> &[u8; 5] {
        &self.0
    }
}

/// Rate how well a computed pattern matches a requested layout under a mode
///
/// Per position: if the tile color's group under `mode` equals the requested
/// group index, score 10 plus `max(0, 2 - offset)` for the color's position
/// within its group. Higher is better; 0 means no position matched.
///
/// # Examples
/// ```
/// use wordraw::core::{Color, Pattern};
/// use wordraw::mode::Mode;
/// use wordraw::rating::{RequestedPattern, pattern_match_rating};
///
/// let mode = Mode::parse("x/gy").unwrap();
/// let pattern = Pattern::new([
///     Color::Green,
///     Color::Yellow,
///     Color::Gray,
///     Color::Gray,
///     Color::Gray,
/// ]);
/// let requested = RequestedPattern::new(&[1, 1, 1, 1, 1]).unwrap();
///
/// // Two group matches (20) + green at offset 0 (2) + yellow at offset 1 (1)
/// assert_eq!(pattern_match_rating(pattern, &requested, &mode), 23);
/// ```
#[must_use]
pub fn pattern_match_rating(pattern: Pattern, requested: &RequestedPattern, mode: &Mode) -> u32 {
    let mut group_matches = 0u32;
    let mut color_score = 0u32;

    for (&tile, &want) in pattern.tiles().iter().zip(requested.groups()) {
        let slot = mode.slot(tile);
        if slot.group == usize::from(want) {
            group_matches += 1;
            color_score += 2u32.saturating_sub(slot.offset as u32);
        }
    }

    group_matches * 10 + color_score
}
