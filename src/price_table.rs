// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Unit prices keyed by product code.
//!
//! # Example
//!
//! ```
//! use checkout_demo_rs::PriceTable;
//! use rust_decimal_macros::dec;
//!
//! let prices = PriceTable::from([("A", 25), ("B", 40), ("P", 30)]);
//! assert_eq!(prices.get("B"), Some(dec!(40)));
//! assert!(!prices.contains("D"));
//! ```

use crate::base::ProductCode;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Mapping from product code to unit price in minor currency units.
///
/// Codes that are never scanned are allowed and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTable {
    prices: HashMap<ProductCode, Decimal>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit price of `code`, returning the previous price if any.
    pub fn insert(&mut self, code: impl Into<ProductCode>, unit_price: Decimal) -> Option<Decimal> {
        self.prices.insert(code.into(), unit_price)
    }

    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.prices.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.prices.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<K, P> FromIterator<(K, P)> for PriceTable
where
    K: Into<ProductCode>,
    P: Into<Decimal>,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self {
            prices: iter
                .into_iter()
                .map(|(code, price)| (code.into(), price.into()))
                .collect(),
        }
    }
}

impl<K, P, const N: usize> From<[(K, P); N]> for PriceTable
where
    K: Into<ProductCode>,
    P: Into<Decimal>,
{
    fn from(entries: [(K, P); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn insert_replaces_price() {
        let mut prices = PriceTable::new();
        assert_eq!(prices.insert("A", dec!(25)), None);
        assert_eq!(prices.insert("A", dec!(20)), Some(dec!(25)));
        assert_eq!(prices.get("A"), Some(dec!(20)));
        assert_eq!(prices.len(), 1);
    }

    #[test]
    fn missing_code_has_no_price() {
        let prices = PriceTable::from([("A", 25)]);
        assert_eq!(prices.get("B"), None);
        assert!(!prices.contains("B"));
    }

    #[test]
    fn collects_from_iterator() {
        let prices: PriceTable = vec![("A".to_string(), dec!(25.5)), ("P".to_string(), dec!(30))]
            .into_iter()
            .collect();
        assert_eq!(prices.get("A"), Some(dec!(25.5)));
        assert_eq!(prices.get("P"), Some(dec!(30)));
    }

    #[test]
    fn empty_table() {
        let prices = PriceTable::new();
        assert!(prices.is_empty());
        assert_eq!(prices.len(), 0);
    }
}
