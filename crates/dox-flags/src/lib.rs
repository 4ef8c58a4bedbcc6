//! Typesafe bit-flag sets over plain enums.
//!
//! [`FlagSet`] stores membership for any type whose values map to distinct
//! bit positions through the [`Flag`] trait. The set itself is a single
//! `u32`: `Copy`, allocation-free, and cheap to pass around.
//!
//! # Example
//!
//! ```
//! use dox_flags::{Flag, FlagSet};
//!
//! #[derive(Clone, Copy)]
//! enum Channel {
//!     Red,
//!     Green,
//!     Blue,
//! }
//!
//! impl Flag for Channel {
//!     fn bit(self) -> u32 {
//!         self as u32
//!     }
//! }
//!
//! let mut set = FlagSet::of(&[Channel::Red, Channel::Blue]);
//! assert!(set.contains(Channel::Red));
//! assert!(!set.contains(Channel::Green));
//! set.remove(Channel::Blue);
//! assert_eq!(set, FlagSet::from(Channel::Red));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// A flag usable in a [`FlagSet`].
pub trait Flag: Copy {
    /// Bit position of this flag. Must be in `0..32` and distinct per value.
    fn bit(self) -> u32;
}

/// A set of [`Flag`]s backed by a single `u32`.
pub struct FlagSet<F: Flag> {
    bits: u32,
    marker: PhantomData<F>,
}

impl<F: Flag> FlagSet<F> {
    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            marker: PhantomData,
        }
    }

    /// Creates a set containing exactly the given flags.
    #[must_use]
    pub fn of(flags: &[F]) -> Self {
        let mut set = Self::empty();
        for &flag in flags {
            set.insert(flag);
        }
        set
    }

    /// Returns `true` if `flag` is a member of the set.
    pub fn contains(self, flag: F) -> bool {
        self.bits & mask(flag) != 0
    }

    /// Adds `flag` to the set.
    pub fn insert(&mut self, flag: F) {
        self.bits |= mask(flag);
    }

    /// Removes `flag` from the set.
    pub fn remove(&mut self, flag: F) {
        self.bits &= !mask(flag);
    }

    /// Returns `true` if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Set union.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
            marker: PhantomData,
        }
    }

    /// Set intersection.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
            marker: PhantomData,
        }
    }

    /// Raw bit representation of the set.
    pub const fn bits(self) -> u32 {
        self.bits
    }
}

fn mask<F: Flag>(flag: F) -> u32 {
    debug_assert!(flag.bit() < 32);
    1 << flag.bit()
}

// Manual impls: the set's traits must not depend on what `F` derives.
impl<F: Flag> Clone for FlagSet<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Flag> Copy for FlagSet<F> {}

impl<F: Flag> PartialEq for FlagSet<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F: Flag> Eq for FlagSet<F> {}

impl<F: Flag> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Flag> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:#b})", self.bits)
    }
}

impl<F: Flag> From<F> for FlagSet<F> {
    fn from(flag: F) -> Self {
        Self::of(&[flag])
    }
}

impl<F: Flag> BitOr for FlagSet<F> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<F: Flag> BitOr<F> for FlagSet<F> {
    type Output = Self;

    fn bitor(mut self, rhs: F) -> Self {
        self.insert(rhs);
        self
    }
}

impl<F: Flag> BitOrAssign for FlagSet<F> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl<F: Flag> BitOrAssign<F> for FlagSet<F> {
    fn bitor_assign(&mut self, rhs: F) {
        self.insert(rhs);
    }
}

impl<F: Flag> BitAnd for FlagSet<F> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl<F: Flag> BitAndAssign for FlagSet<F> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}
