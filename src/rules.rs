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

//! Promotional pricing rules.
//!
//! Both rules split a quantity into complete groups of `N` units and a
//! remainder. Remainder units are always charged at the unit price; only
//! complete groups are discounted.
//!
//! | Rule | Charge per complete group |
//! |------|---------------------------|
//! | [`group_discount`] | `M` units at the unit price |
//! | [`flat_group_offer`] | a fixed offer price |
//!
//! # Example
//!
//! ```
//! use checkout_demo_rs::rules::{apply_flat_group_offer, apply_group_discount};
//! use rust_decimal_macros::dec;
//!
//! // Three for two: 8 items at 40p, two complete groups.
//! assert_eq!(apply_group_discount(8, dec!(40)), dec!(240));
//!
//! // Three for £1: 5 items at 40p.
//! assert_eq!(apply_flat_group_offer(5, dec!(40), dec!(100)).total, dec!(180));
//! ```

use crate::error::PolicyError;
use rust_decimal::Decimal;
use std::fmt;
use std::num::NonZeroU64;

/// Group size of the "three for ..." promotions.
pub const THREE: NonZeroU64 = NonZeroU64::new(3).unwrap();

/// "Charge `charged_units` of every `group_size`" with `charged_units <= group_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupShare {
    group_size: NonZeroU64,
    charged_units: u64,
}

impl GroupShare {
    /// Three for the price of two.
    pub const THREE_FOR_TWO: Self = Self {
        group_size: THREE,
        charged_units: 2,
    };

    /// # Errors
    ///
    /// - [`PolicyError::EmptyGroup`] - `group_size` is zero.
    /// - [`PolicyError::ChargedExceedsGroup`] - more units charged than grouped.
    pub fn new(group_size: u64, charged_units: u64) -> Result<Self, PolicyError> {
        let group_size = NonZeroU64::new(group_size).ok_or(PolicyError::EmptyGroup)?;
        if charged_units > group_size.get() {
            return Err(PolicyError::ChargedExceedsGroup {
                group_size: group_size.get(),
                charged_units,
            });
        }
        Ok(Self {
            group_size,
            charged_units,
        })
    }

    pub fn group_size(&self) -> NonZeroU64 {
        self.group_size
    }

    pub fn charged_units(&self) -> u64 {
        self.charged_units
    }
}

/// Result of evaluating a rule for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub total: Decimal,
    /// Set when the promotion costs more than paying full price.
    pub warning: Option<UnfavourableOffer>,
}

impl RuleOutcome {
    fn plain(total: Decimal) -> Self {
        Self {
            total,
            warning: None,
        }
    }
}

/// Diagnostic for an offer that is more expensive than no offer at all.
///
/// Not an error: the discounted total is still charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnfavourableOffer {
    pub discounted: Decimal,
    pub undiscounted: Decimal,
}

impl fmt::Display for UnfavourableOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bad deal: {} with discount, {} without discount",
            self.discounted, self.undiscounted
        )
    }
}

/// Splits `count` into (complete groups, remainder units).
fn split(count: u64, group_size: NonZeroU64) -> (u64, u64) {
    let group_size = group_size.get();
    (count / group_size, count % group_size)
}

/// "N for the price of M": each complete group of `share.group_size()`
/// units is charged as `share.charged_units()` units.
///
/// Never more than `count * unit_price`.
pub fn group_discount(count: u64, unit_price: Decimal, share: GroupShare) -> Decimal {
    let (groups, remainder) = split(count, share.group_size);
    // groups * M keeps the result exact, unlike multiplying by M/N.
    // M <= N bounds the product by `count`, so it cannot overflow.
    let charged = groups * share.charged_units + remainder;
    Decimal::from(charged) * unit_price
}

/// "N for a flat price": each complete group of `group_size` units is
/// charged `offer_price`.
///
/// Logs a warning and attaches an [`UnfavourableOffer`] when the result is
/// higher than `count * unit_price`.
pub fn flat_group_offer(
    count: u64,
    unit_price: Decimal,
    group_size: NonZeroU64,
    offer_price: Decimal,
) -> RuleOutcome {
    let (groups, remainder) = split(count, group_size);
    let total = Decimal::from(remainder) * unit_price + Decimal::from(groups) * offer_price;
    let undiscounted = Decimal::from(count) * unit_price;

    if total <= undiscounted {
        return RuleOutcome::plain(total);
    }

    let warning = UnfavourableOffer {
        discounted: total,
        undiscounted,
    };
    tracing::warn!(
        count,
        discounted = %total,
        undiscounted = %undiscounted,
        "flat group offer is more expensive than full price"
    );
    RuleOutcome {
        total,
        warning: Some(warning),
    }
}

/// Three for the price of two.
pub fn apply_group_discount(count: u64, unit_price: Decimal) -> Decimal {
    group_discount(count, unit_price, GroupShare::THREE_FOR_TWO)
}

/// Three for `offer_price`.
pub fn apply_flat_group_offer(count: u64, unit_price: Decimal, offer_price: Decimal) -> RuleOutcome {
    flat_group_offer(count, unit_price, THREE, offer_price)
}
