use serde::Deserialize;

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{AddAssign, Mul},
    str::FromStr,
};

/// Represents an amount of money in USD currency.
///
/// The amount is stored as a floating-point number of dollars, exactly as it
/// appears in the catalogue. Sums and products are never rounded; the
/// [`Display`] implementation formats the amount as `$` followed by two
/// decimal places, and honours width and alignment flags.
///
/// ```
/// # use compute_sales::Usd;
/// assert_eq!(Usd::new(19.5).to_string(), "$19.50");
/// assert_eq!(format!("{:>8}", Usd::new(3.0)), "   $3.00");
/// ```
#[derive(Clone, Copy, Default, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Usd(f64);

impl Usd {
    #[must_use]
    pub fn new(dollars: f64) -> Self {
        Self(dollars)
    }

    #[must_use]
    pub fn dollars(self) -> f64 {
        self.0
    }

    /// Total ordering over amounts, for sorting report rows.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!("${:.2}", self.0))
    }
}

impl FromStr for Usd {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('$').replace(',', "");
        Ok(Self(digits.parse()?))
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u64> for Usd {
    type Output = Self;

    #[allow(clippy::cast_precision_loss)]
    fn mul(self, rhs: u64) -> Self::Output {
        Self(self.0 * rhs as f64)
    }
}
