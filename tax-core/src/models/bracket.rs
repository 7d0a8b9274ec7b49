//! Progressive bracket tables.
//!
//! A [`BracketTable`] is an ordered, non-empty list of [`Bracket`]s with
//! strictly increasing upper bounds. The last bracket is open-ended and
//! matches every amount above the preceding bounds.
//!
//! Lookups scan the brackets in ascending order and stop at the first one
//! whose inclusive upper bound is greater than or equal to the amount.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{Bracket, BracketTable};
//!
//! const BRACKETS: &[Bracket<u8>] = &[
//!     Bracket::bounded(dec!(100), 1),
//!     Bracket::bounded(dec!(200), 2),
//!     Bracket::open(3),
//! ];
//! const TABLE: BracketTable<u8> = BracketTable::new(BRACKETS);
//!
//! assert_eq!(TABLE.lookup(dec!(100)), 1);
//! assert_eq!(TABLE.lookup(dec!(101)), 2);
//! assert_eq!(TABLE.lookup(dec!(1000000)), 3);
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single tier of a bracket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket<T> {
    /// Inclusive upper bound of the tier. `None` for the open-ended tier.
    pub upper_bound: Option<Decimal>,
    /// Rate or amount associated with the tier.
    pub value: T,
}

impl<T> Bracket<T> {
    /// Creates a tier covering amounts up to and including `upper_bound`.
    pub const fn bounded(
        upper_bound: Decimal,
        value: T,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            value,
        }
    }

    /// Creates the open-ended top tier.
    pub const fn open(value: T) -> Self {
        Self {
            upper_bound: None,
            value,
        }
    }

    /// Returns true if `amount` does not exceed this tier's upper bound.
    pub fn covers(
        &self,
        amount: Decimal,
    ) -> bool {
        self.upper_bound.is_none_or(|bound| amount <= bound)
    }

    /// Maps the tier's value, keeping its bound.
    pub fn map<U>(
        self,
        f: impl FnOnce(T) -> U,
    ) -> Bracket<U> {
        Bracket {
            upper_bound: self.upper_bound,
            value: f(self.value),
        }
    }
}

/// The tier matched by an amount together with its neighbours.
///
/// `previous` is absent for the first tier and `next` is absent for the
/// open-ended tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyBrackets<T> {
    pub previous: Option<Bracket<T>>,
    pub current: Bracket<T>,
    pub next: Option<Bracket<T>>,
}

impl<T> NearbyBrackets<T> {
    /// Maps the value of every tier.
    pub fn map<U>(
        self,
        mut f: impl FnMut(T) -> U,
    ) -> NearbyBrackets<U> {
        NearbyBrackets {
            previous: self.previous.map(|b| b.map(&mut f)),
            current: self.current.map(&mut f),
            next: self.next.map(|b| b.map(&mut f)),
        }
    }
}

/// A static, ordered, non-empty table of brackets.
pub struct BracketTable<T: 'static> {
    brackets: &'static [Bracket<T>],
}

impl<T> BracketTable<T> {
    /// Wraps a static slice of brackets.
    ///
    /// Panics (at compile time when used in a `const`) if `brackets` is empty.
    pub const fn new(brackets: &'static [Bracket<T>]) -> Self {
        assert!(!brackets.is_empty(), "bracket table must not be empty");
        Self { brackets }
    }

    /// Returns the underlying brackets in ascending order.
    pub fn brackets(&self) -> &'static [Bracket<T>] {
        self.brackets
    }

    /// Index of the first bracket covering `amount`.
    ///
    /// Amounts above every finite bound fall into the last bracket.
    pub fn position(
        &self,
        amount: Decimal,
    ) -> usize {
        self.brackets
            .iter()
            .position(|bracket| bracket.covers(amount))
            .unwrap_or(self.brackets.len() - 1)
    }

    /// Returns the bracket covering `amount`.
    pub fn find(
        &self,
        amount: Decimal,
    ) -> &'static Bracket<T> {
        &self.brackets[self.position(amount)]
    }
}

impl<T: Copy> BracketTable<T> {
    /// Returns the value of the bracket covering `amount`.
    pub fn lookup(
        &self,
        amount: Decimal,
    ) -> T {
        self.find(amount).value
    }

    /// Returns the bracket covering `amount` and its neighbours.
    ///
    /// Uses the same matching rule as [`BracketTable::lookup`], so
    /// `nearby(x).current.value == lookup(x)` for every `x`.
    pub fn nearby(
        &self,
        amount: Decimal,
    ) -> NearbyBrackets<T> {
        let index = self.position(amount);

        NearbyBrackets {
            previous: index
                .checked_sub(1)
                .and_then(|i| self.brackets.get(i))
                .copied(),
            current: self.brackets[index],
            next: self.brackets.get(index + 1).copied(),
        }
    }
}

impl<T> Clone for BracketTable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BracketTable<T> {}

impl<T: fmt::Debug> fmt::Debug for BracketTable<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_list().entries(self.brackets).finish()
    }
}
