//! Mode parsing and color grouping
//!
//! A mode partitions the three tile colors into 2 or 3 ordered groups, written
//! as a string of `x`/`y`/`g` tokens separated by `/`. The mode is the bridge
//! between concrete colors and the abstract group indices used by requested
//! patterns: `"x/gy"` puts gray alone in group 0 and green+yellow together in
//! group 1, so a requested `1` at some position is satisfied by either a green
//! or a yellow tile there.

use crate::core::Color;
use std::fmt;
use std::str::FromStr;

/// Where a color sits inside a mode: (group index, offset within group)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub group: usize,
    pub offset: usize,
}

/// A validated color grouping
///
/// Invariants, enforced at parse time:
/// - 1 to 3 groups, none empty (shapes 3, 2+1, 1+2 or 1+1+1)
/// - each of the three colors appears exactly once across all groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    groups: Vec<Vec<Color>>,
    // Indexed by Color ordinal
    slots: [Slot; 3],
}

/// Error type for malformed mode strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// Group shape is not one of 3, 2+1, 1+2 or 1+1+1
    BadShape(String),
    /// A character other than 'x', 'y', 'g' or '/'
    UnknownToken(char),
    /// A color token appears more than once
    DuplicateColor(char),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadShape(mode) => {
                write!(f, "Mode '{mode}' must group x, y, g as 3, 2+1, 1+2 or 1+1+1")
            }
            Self::UnknownToken(ch) => write!(f, "Unknown mode token '{ch}'"),
            Self::DuplicateColor(ch) => write!(f, "Color '{ch}' appears more than once"),
        }
    }
}

impl std::error::Error for ModeError {}

impl Mode {
    /// Parse a mode string like `"x/gy"` or `"y/g/x"`
    ///
    /// # Errors
    /// Returns `ModeError` if the shape is invalid, a token is unknown, or a
    /// color is missing or duplicated.
    ///
    /// # Examples
    /// ```
    /// use wordraw::core::Color;
    /// use wordraw::mode::Mode;
    ///
    /// let mode = Mode::parse("x/gy").unwrap();
    /// assert_eq!(mode.group_count(), 2);
    /// assert_eq!(mode.slot(Color::Green).group, 1);
    /// assert_eq!(mode.slot(Color::Green).offset, 0);
    /// assert_eq!(mode.slot(Color::Yellow).offset, 1);
    ///
    /// assert!(Mode::parse("xx/g").is_err());
    /// ```
    pub fn parse(mode: &str) -> Result<Self, ModeError> {
        let parts: Vec<&str> = mode.split('/').collect();

        // Exactly three tokens across 1-3 non-empty groups gives exactly the
        // four legal shapes.
        let total: usize = parts.iter().map(|p| p.chars().count()).sum();
        if parts.len() > 3 || total != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(ModeError::BadShape(mode.to_string()));
        }

        let mut groups: Vec<Vec<Color>> = Vec::with_capacity(parts.len());
        let mut slots = [None; 3];

        for (group_index, part) in parts.iter().enumerate() {
            let mut group = Vec::with_capacity(part.len());
            for (offset, ch) in part.chars().enumerate() {
                let color = Color::from_token(ch).ok_or(ModeError::UnknownToken(ch))?;
                if slots[color.index()].is_some() {
                    return Err(ModeError::DuplicateColor(ch));
                }
                slots[color.index()] = Some(Slot {
                    group: group_index,
                    offset,
                });
                group.push(color);
            }
            groups.push(group);
        }

        // Three distinct tokens out of a three-token alphabet: all colors placed
        let slots = slots.map(|slot| slot.expect("all colors assigned"));

        Ok(Self { groups, slots })
    }

    /// Number of groups (1 to 3)
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// The (group, offset) position of a color in this mode
    #[inline]
    #[must_use]
    pub const fn slot(&self, color: Color) -> Slot {
        self.slots[color.index()]
    }

    /// The first color listed in a group, used as its visual representative
    #[must_use]
    pub fn representative(&self, group: usize) -> Option<Color> {
        self.groups.get(group).and_then(|g| g.first().copied())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for color in group {
                write!(f, "{}", color.token())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
