use crate::error::TicketingError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a non-negative monetary amount in the smallest currency unit.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for the ticketing calculations. Totals, down payments and
/// change are all `Money`; the arithmetic exposed here keeps the value non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Money(Decimal);

/// Represents the unit price of one ticket category.
///
/// Zero is a valid price (free admission tiers); negative prices are rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct UnitPrice(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, TicketingError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(TicketingError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtraction clamped at zero, so change due can never go negative.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        if self.0 > rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self::ZERO
        }
    }

    /// The smaller of two amounts.
    pub fn min(self, rhs: Self) -> Self {
        if self.0 <= rhs.0 { self } else { rhs }
    }
}

impl TryFrom<Decimal> for Money {
    type Error = TicketingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

// Non-negative + non-negative stays non-negative, so plain Add is safe.
impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl UnitPrice {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, TicketingError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(TicketingError::ValidationError(
                "Unit price must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Subtotal for a headcount at this price.
    pub fn for_heads(&self, heads: u32) -> Money {
        Money(self.0 * Decimal::from(heads))
    }
}

impl TryFrom<Decimal> for UnitPrice {
    type Error = TicketingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
