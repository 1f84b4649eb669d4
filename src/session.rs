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

//! Incremental checkout session.
//!
//! A [`CheckoutSession`] collects scanned product codes and prices them on
//! request. It never removes items and has no closed state.
//!
//! # Example
//!
//! ```
//! use checkout_demo_rs::{CheckoutSession, PriceTable};
//! use rust_decimal_macros::dec;
//!
//! let mut session = CheckoutSession::new(PriceTable::from([("A", 25), ("B", 40), ("P", 30)]));
//! for code in ["B", "A", "B", "P", "B"] {
//!     session.scan(code).unwrap();
//! }
//! assert_eq!(session.total().unwrap(), dec!(155));
//!
//! session.scan("B").unwrap();
//! assert_eq!(session.total().unwrap(), dec!(195));
//! ```

use crate::base::ProductCode;
use crate::checkout::{Pricer, Quote};
use crate::error::PricingError;
use crate::price_table::PriceTable;
use rust_decimal::Decimal;

/// Scanned items plus the prices and promotions used to total them.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    prices: PriceTable,
    pricer: Pricer,
    scanned: Vec<ProductCode>,
}

impl CheckoutSession {
    /// Creates an empty session priced under [`Pricer::standard`].
    pub fn new(prices: PriceTable) -> Self {
        Self::with_pricer(prices, Pricer::standard())
    }

    pub fn with_pricer(prices: PriceTable, pricer: Pricer) -> Self {
        Self {
            prices,
            pricer,
            scanned: Vec::new(),
        }
    }

    /// Adds one item.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::MissingPrice`] if `code` is not in the price
    /// table. The scan list is left unchanged.
    pub fn scan(&mut self, code: &str) -> Result<(), PricingError> {
        if !self.prices.contains(code) {
            return Err(PricingError::MissingPrice(code.into()));
        }
        self.scanned.push(code.into());
        tracing::debug!(code, items = self.scanned.len(), "scanned");
        Ok(())
    }

    /// Total of everything scanned so far, recomputed from the full scan list.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnrecognizedProduct`] if a scanned code has a
    /// price but no policy.
    pub fn total(&self) -> Result<Decimal, PricingError> {
        self.pricer.total(self.scanned.as_slice(), &self.prices)
    }

    /// Itemised breakdown of everything scanned so far.
    ///
    /// # Errors
    ///
    /// Same as [`CheckoutSession::total`].
    pub fn quote(&self) -> Result<Quote, PricingError> {
        self.pricer.quote(self.scanned.as_slice(), &self.prices)
    }

    /// Scanned codes in scan order.
    pub fn scanned(&self) -> &[ProductCode] {
        &self.scanned
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.scanned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scanned.is_empty()
    }
}
