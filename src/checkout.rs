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

//! Checkout aggregation.
//!
//! A [`Pricer`] turns a list of scanned product codes into a [`Quote`]:
//!
//! 1. Every code must have a discount policy (the allowed set).
//! 2. Every code must have a unit price.
//! 3. Codes are counted; scan order does not matter.
//! 4. Each product that occurs is priced under its policy and the
//!    subtotals are summed.
//!
//! The first failed check aborts pricing, so there are no partial totals.
//!
//! # Example
//!
//! ```
//! use checkout_demo_rs::{PriceTable, checkout_total};
//! use rust_decimal_macros::dec;
//!
//! let prices = PriceTable::from([("A", 25), ("B", 40), ("P", 30)]);
//! let total = checkout_total(&["B", "A", "B", "P", "B"], &prices).unwrap();
//! assert_eq!(total, dec!(155));
//! ```

use crate::base::ProductCode;
use crate::error::{AllowedCodes, PricingError};
use crate::policy::DiscountPolicy;
use crate::price_table::PriceTable;
use crate::rules::UnfavourableOffer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Price of three `B` items under the standard policies.
pub const STANDARD_FLAT_OFFER_PRICE: Decimal = dec!(100);

/// Maps each allowed product code to the policy used to price it.
///
/// The keys double as the allowed set: pricing a code without a policy
/// fails with [`PricingError::UnrecognizedProduct`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pricer {
    policies: BTreeMap<ProductCode, DiscountPolicy>,
}

impl Pricer {
    /// Creates a pricer with no allowed products.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store's promotions.
    ///
    /// | Code | Policy |
    /// |------|--------|
    /// | `A` | three for two |
    /// | `B` | three for [`STANDARD_FLAT_OFFER_PRICE`] |
    /// | `P` | no discount |
    pub fn standard() -> Self {
        Self::new()
            .with_policy("A", DiscountPolicy::three_for_two())
            .with_policy("B", DiscountPolicy::three_for(STANDARD_FLAT_OFFER_PRICE))
            .with_policy("P", DiscountPolicy::NoDiscount)
    }

    /// Allows `code`, priced under `policy`. Replaces any previous policy.
    pub fn with_policy(mut self, code: impl Into<ProductCode>, policy: DiscountPolicy) -> Self {
        self.policies.insert(code.into(), policy);
        self
    }

    pub fn policy(&self, code: &str) -> Option<&DiscountPolicy> {
        self.policies.get(code)
    }

    /// Allowed codes in ascending order.
    pub fn allowed_codes(&self) -> AllowedCodes {
        AllowedCodes(self.policies.keys().cloned().collect())
    }

    fn policy_for(&self, code: &str) -> Result<&DiscountPolicy, PricingError> {
        self.policies
            .get(code)
            .ok_or_else(|| PricingError::UnrecognizedProduct {
                code: code.into(),
                allowed: self.allowed_codes(),
            })
    }

    /// Prices `codes` against `prices`, keeping the per-product breakdown.
    ///
    /// # Errors
    ///
    /// - [`PricingError::UnrecognizedProduct`] - A code has no policy. Checked
    ///   for every code before any price lookup.
    /// - [`PricingError::MissingPrice`] - A code has no entry in `prices`.
    pub fn quote<S: AsRef<str>>(
        &self,
        codes: &[S],
        prices: &PriceTable,
    ) -> Result<Quote, PricingError> {
        // Each pass walks the scan list in order, so the first offending
        // code is the one reported.
        let mut tallies: BTreeMap<&str, (&DiscountPolicy, u64)> = BTreeMap::new();
        for code in codes {
            let code = code.as_ref();
            match tallies.entry(code) {
                Entry::Occupied(mut entry) => entry.get_mut().1 += 1,
                Entry::Vacant(entry) => {
                    entry.insert((self.policy_for(code)?, 1));
                }
            }
        }

        let mut unit_prices: BTreeMap<&str, Decimal> = BTreeMap::new();
        for code in codes {
            let code = code.as_ref();
            if let Entry::Vacant(entry) = unit_prices.entry(code) {
                entry.insert(unit_price_for(prices, code)?);
            }
        }

        // Both maps are keyed by exactly the scanned codes, so they iterate
        // in step. A code that was never scanned is never evaluated.
        let mut quote = Quote::default();
        for ((code, (policy, quantity)), unit_price) in
            tallies.into_iter().zip(unit_prices.into_values())
        {
            let outcome = policy.evaluate(quantity, unit_price);

            tracing::debug!(code, quantity, %unit_price, subtotal = %outcome.total, "priced line");

            if let Some(warning) = outcome.warning {
                quote.warnings.insert(code.into(), warning);
            }
            quote.total += outcome.total;
            quote.lines.push(QuoteLine {
                code: code.into(),
                quantity,
                unit_price,
                subtotal: outcome.total,
            });
        }

        Ok(quote)
    }

    /// Grand total of `codes` after discounts.
    ///
    /// # Errors
    ///
    /// Same as [`Pricer::quote`].
    pub fn total<S: AsRef<str>>(
        &self,
        codes: &[S],
        prices: &PriceTable,
    ) -> Result<Decimal, PricingError> {
        self.quote(codes, prices).map(|quote| quote.total())
    }
}

fn unit_price_for(prices: &PriceTable, code: &str) -> Result<Decimal, PricingError> {
    prices
        .get(code)
        .ok_or_else(|| PricingError::MissingPrice(code.into()))
}

/// Grand total of `codes` under [`Pricer::standard`].
///
/// # Errors
///
/// - [`PricingError::UnrecognizedProduct`] - A code is not one of `A`, `B`, `P`.
/// - [`PricingError::MissingPrice`] - A code has no entry in `prices`.
pub fn checkout_total<S: AsRef<str>>(
    codes: &[S],
    prices: &PriceTable,
) -> Result<Decimal, PricingError> {
    Pricer::standard().total(codes, prices)
}

/// One product's share of a [`Quote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLine {
    pub code: ProductCode,
    pub quantity: u64,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// Priced scan list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
    total: Decimal,
    /// Ordered by product code.
    lines: Vec<QuoteLine>,
    warnings: BTreeMap<ProductCode, UnfavourableOffer>,
}

impl Quote {
    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn lines(&self) -> &[QuoteLine] {
        &self.lines
    }

    pub fn line(&self, code: &str) -> Option<&QuoteLine> {
        self.lines.iter().find(|line| line.code.as_str() == code)
    }

    /// Offers that cost more than full price, keyed by product code.
    pub fn warnings(&self) -> &BTreeMap<ProductCode, UnfavourableOffer> {
        &self.warnings
    }
}
