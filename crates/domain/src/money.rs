//! Exact money arithmetic.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Money amount held in paise (hundredths of a rupee) to keep invoice
/// arithmetic exact.
///
/// On the wire, amounts serialize as plain rupee numbers (`1500.5`) so the
/// persisted snapshot stays shape-compatible with the seed dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    paise: i64,
}

impl Money {
    /// Creates an amount from paise.
    pub fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    /// Creates an amount from whole rupees.
    pub fn from_rupees(rupees: i64) -> Self {
        Self {
            paise: rupees * 100,
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { paise: 0 }
    }

    /// Returns the amount in paise.
    pub fn paise(&self) -> i64 {
        self.paise
    }

    /// Returns the whole-rupee portion.
    pub fn rupees(&self) -> i64 {
        self.paise / 100
    }

    /// Returns the amount as fractional rupees.
    pub fn as_rupees_f64(&self) -> f64 {
        self.paise as f64 / 100.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.paise == 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            paise: self.paise * quantity as i64,
        }
    }

    /// Returns the given percentage of this amount, truncated to a paisa.
    pub fn percent(&self, pct: i64) -> Money {
        Money {
            paise: self.paise * pct / 100,
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.paise < 0 { "-" } else { "" };
        write!(
            f,
            "{}\u{20B9}{}.{:02}",
            sign,
            (self.paise / 100).abs(),
            (self.paise % 100).abs()
        )
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            paise: self.paise + rhs.paise,
        }
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money {
            paise: self.paise - rhs.paise,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.paise += rhs.paise;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.paise % 100 == 0 {
            serializer.serialize_i64(self.paise / 100)
        } else {
            serializer.serialize_f64(self.as_rupees_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = f64::deserialize(deserializer)?;
        Ok(Money {
            paise: (rupees * 100.0).round() as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rupees_converts_to_paise() {
        let m = Money::from_rupees(1000);
        assert_eq!(m.paise(), 100_000);
        assert_eq!(m.rupees(), 1000);
    }

    #[test]
    fn arithmetic_is_exact() {
        let a = Money::from_rupees(3000);
        let tax = a.percent(18);
        assert_eq!(tax, Money::from_rupees(540));
        assert_eq!(a + tax, Money::from_rupees(3540));
        assert_eq!(a + tax - tax, a);
    }

    #[test]
    fn multiply_scales_by_quantity() {
        assert_eq!(Money::from_rupees(200).multiply(3), Money::from_rupees(600));
    }

    #[test]
    fn sum_folds_amounts() {
        let total: Money = [Money::from_rupees(1), Money::from_paise(50)]
            .into_iter()
            .sum();
        assert_eq!(total.paise(), 150);
    }

    #[test]
    fn display_formats_rupees() {
        assert_eq!(Money::from_paise(1234).to_string(), "\u{20B9}12.34");
        assert_eq!(Money::from_paise(-5).to_string(), "-\u{20B9}0.05");
    }

    #[test]
    fn serializes_as_rupee_numbers() {
        assert_eq!(serde_json::to_string(&Money::from_rupees(1500)).unwrap(), "1500");
        assert_eq!(serde_json::to_string(&Money::from_paise(1250)).unwrap(), "12.5");
    }

    #[test]
    fn deserializes_seed_style_amounts() {
        let m: Money = serde_json::from_str("1500").unwrap();
        assert_eq!(m, Money::from_rupees(1500));
        let m: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(m.paise(), 1250);
    }
}
