//! Gesture symbols and subscription sets

use core::str::FromStr;

/// Symbolic gesture event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Edge tilt with positive sign and back to face up
    Up,
    /// Edge tilt with negative sign and back to face up
    Down,
    /// Side roll to the negative side
    Left,
    /// Side roll to the positive side
    Right,
    /// Completed side/edge alternation
    Escape,
    /// Edge held for the whole gesture window
    Select,
    /// Orientation category or sign changed
    OrientationChanged,
}

impl Gesture {
    pub const ALL: [Gesture; 7] = [
        Gesture::Up,
        Gesture::Down,
        Gesture::Left,
        Gesture::Right,
        Gesture::Escape,
        Gesture::Select,
        Gesture::OrientationChanged,
    ];

    /// One-character code
    pub const fn code(self) -> char {
        match self {
            Gesture::Up => 'U',
            Gesture::Down => 'D',
            Gesture::Left => 'L',
            Gesture::Right => 'R',
            Gesture::Escape => 'E',
            Gesture::Select => 'S',
            Gesture::OrientationChanged => '*',
        }
    }

    pub fn from_code(code: char) -> Option<Gesture> {
        Self::ALL.into_iter().find(|g| g.code() == code)
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Error parsing a gesture code string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureError {
    UnknownCode(char),
}

/// Set of gestures a task subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureSet(u8);

impl GestureSet {
    pub const EMPTY: GestureSet = GestureSet(0);

    pub const fn with(self, gesture: Gesture) -> Self {
        GestureSet(self.0 | gesture.bit())
    }

    pub const fn union(self, other: GestureSet) -> Self {
        GestureSet(self.0 | other.0)
    }

    pub const fn contains(self, gesture: Gesture) -> bool {
        self.0 & gesture.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Gesture> {
        Gesture::ALL.into_iter().filter(move |g| self.contains(*g))
    }
}

impl FromStr for GestureSet {
    type Err = GestureError;

    /// Parse a code string such as `"UDE"`
    fn from_str(codes: &str) -> Result<Self, Self::Err> {
        codes.chars().try_fold(GestureSet::EMPTY, |set, c| {
            Gesture::from_code(c)
                .map(|g| set.with(g))
                .ok_or(GestureError::UnknownCode(c))
        })
    }
}
