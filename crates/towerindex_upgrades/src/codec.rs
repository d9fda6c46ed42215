//! Upgrade-set codec.
//!
//! An upgrade set is three decimal digits, one per path, giving the tier a
//! tower has reached on each path: `302` is tier 3 on the top path and tier 2
//! on the bottom path. A set is valid when, sorted ascending, its digits are
//! `[0, x, y]` with `x <= 2` and `y <= 5`.

use std::fmt;
use std::str::FromStr;

use towerindex_foundation::{Error, Result};

/// Number of paths encoded in an upgrade set.
pub const PATHS: u8 = 3;

/// Highest purchasable tier.
pub const MAX_TIER: u8 = 5;

/// Highest tier a cross path can reach.
pub const MAX_CROSS_TIER: u8 = 2;

/// Three per-path tiers. Digits are `0..=9` until [`is_valid`](Self::is_valid)
/// says otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UpgradeSet([u8; 3]);

impl UpgradeSet {
    /// No upgrades on any path (`000`).
    pub const NONE: UpgradeSet = UpgradeSet([0, 0, 0]);

    /// Tier 2 on every path (`222`), the base line used for grid displays.
    pub const BASE_LINE: UpgradeSet = UpgradeSet([2, 2, 2]);

    /// Creates a set from raw digits.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidUpgradeSet` error if any digit is above 9.
    pub fn new(digits: [u8; 3]) -> Result<Self> {
        if digits.iter().any(|&d| d > 9) {
            return Err(Error::invalid_upgrade_set(format!("{digits:?}")));
        }
        Ok(Self(digits))
    }

    /// Places `tier` on `path` and zero on the other paths.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `path` is not 1, 2, or 3, or
    /// `tier` is above 5.
    pub fn from_path_tier(path: u8, tier: u8) -> Result<Self> {
        if !(1..=PATHS).contains(&path) {
            return Err(Error::invalid_argument("path", format!("must be 1, 2, or 3, got {path}")));
        }
        if tier > MAX_TIER {
            return Err(Error::invalid_argument(
                "tier",
                format!("must be an integer between 0 and 5 inclusive, got {tier}"),
            ));
        }
        let mut digits = [0; 3];
        digits[usize::from(path - 1)] = tier;
        Ok(Self(digits))
    }

    /// Returns the digits in path order.
    #[must_use]
    pub const fn digits(self) -> [u8; 3] {
        self.0
    }

    /// Returns the tier on a 1-based path.
    #[must_use]
    pub fn tier_on(self, path: u8) -> Option<u8> {
        path.checked_sub(1).and_then(|i| self.0.get(usize::from(i))).copied()
    }

    fn paths(self) -> impl Iterator<Item = (u8, u8)> {
        (1..=PATHS).zip(self.0)
    }

    fn sorted(self) -> [u8; 3] {
        let mut sorted = self.0;
        sorted.sort_unstable();
        sorted
    }

    /// Returns `(path, tier)` for the highest digit; ties go to the leftmost.
    #[must_use]
    pub fn path_tier(self) -> (u8, u8) {
        let tier = self.sorted()[2];
        let path = self.paths().find(|&(_, d)| d == tier).map_or(1, |(p, _)| p);
        (path, tier)
    }

    /// Returns `(path, tier)` for the second-highest digit.
    ///
    /// The cross path is never the path [`path_tier`](Self::path_tier)
    /// returns, even when both digits are equal.
    #[must_use]
    pub fn cross_path_tier(self) -> (u8, u8) {
        let (path, _) = self.path_tier();
        let cross_tier = self.sorted()[1];
        let cross_path = self
            .paths()
            .find(|&(p, d)| p != path && d == cross_tier)
            .map_or(1, |(p, _)| p);
        (cross_path, cross_tier)
    }

    /// Returns true if the set is reachable in game: one path up to tier 5,
    /// one other path up to tier 2, the third path empty.
    #[must_use]
    pub fn is_valid(self) -> bool {
        let [low, mid, high] = self.sorted();
        low == 0 && mid <= MAX_CROSS_TIER && high <= MAX_TIER
    }
}

impl FromStr for UpgradeSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.as_bytes() {
            &[a, b, c] if [a, b, c].iter().all(u8::is_ascii_digit) => {
                Ok(Self([a - b'0', b - b'0', c - b'0']))
            }
            _ => Err(Error::invalid_upgrade_set(s)),
        }
    }
}

impl fmt::Display for UpgradeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}{b}{c}")
    }
}

/// Returns `(path, tier)` of the main path of a digit string.
///
/// # Errors
///
/// Returns an `InvalidUpgradeSet` error if `upgrade_set` is not three digits.
pub fn path_tier_from_upgrade_set(upgrade_set: &str) -> Result<(u8, u8)> {
    upgrade_set.parse::<UpgradeSet>().map(UpgradeSet::path_tier)
}

/// Returns `(path, tier)` of the cross path of a digit string.
///
/// # Errors
///
/// Returns an `InvalidUpgradeSet` error if `upgrade_set` is not three digits.
pub fn cross_path_tier_from_upgrade_set(upgrade_set: &str) -> Result<(u8, u8)> {
    upgrade_set.parse::<UpgradeSet>().map(UpgradeSet::cross_path_tier)
}

/// Returns true for exactly three digits that form a reachable upgrade set.
#[must_use]
pub fn is_valid_upgrade_set(upgrade_set: &str) -> bool {
    upgrade_set.parse::<UpgradeSet>().is_ok_and(UpgradeSet::is_valid)
}
