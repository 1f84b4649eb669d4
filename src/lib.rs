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

//! # Checkout Demo
//!
//! This library prices a basket of scanned items under multi-buy promotions
//! such as "three for two" and "three for £1".
//!
//! ## Core Components
//!
//! - [`checkout_total`]: One-shot total of a list of product codes
//! - [`CheckoutSession`]: Accumulates scans and totals them on demand
//! - [`Pricer`]: Maps each allowed product code to a [`DiscountPolicy`]
//! - [`PriceTable`]: Unit prices in minor currency units
//! - [`PricingError`]: Error types for pricing failures
//!
//! ## Example
//!
//! ```
//! use checkout_demo_rs::{CheckoutSession, PriceTable, PricingError, checkout_total};
//! use rust_decimal_macros::dec;
//!
//! let prices = PriceTable::from([("A", 25), ("B", 40), ("P", 30)]);
//!
//! // Batch pricing
//! let total = checkout_total(&["B", "B", "B", "A", "A", "A", "P"], &prices).unwrap();
//! assert_eq!(total, dec!(180));
//!
//! // Incremental pricing
//! let mut session = CheckoutSession::new(prices);
//! session.scan("A").unwrap();
//! assert!(matches!(session.scan("D"), Err(PricingError::MissingPrice(_))));
//! assert_eq!(session.total().unwrap(), dec!(25));
//! ```
//!
//! ## Money
//!
//! Prices and totals are [`rust_decimal::Decimal`] values in minor units
//! (pence), so discounted group prices stay exact.

mod base;
pub mod checkout;
pub mod error;
pub mod policy;
mod price_table;
pub mod rules;
mod session;

pub use base::ProductCode;
pub use checkout::{Pricer, Quote, QuoteLine, checkout_total};
pub use error::{AllowedCodes, PolicyError, PricingError};
pub use policy::DiscountPolicy;
pub use price_table::PriceTable;
pub use rules::{
    GroupShare, RuleOutcome, UnfavourableOffer, apply_flat_group_offer, apply_group_discount,
};
pub use session::CheckoutSession;
