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

//! Per-product discount policies.

use crate::error::PolicyError;
use crate::rules::{self, GroupShare, RuleOutcome};
use rust_decimal::Decimal;
use std::num::NonZeroU64;

/// How a product's units are priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountPolicy {
    /// Every unit at the unit price.
    NoDiscount,
    /// "N for the price of M". Built through [`GroupShare::new`] or
    /// [`DiscountPolicy::group_discount`], so it never charges more than
    /// full price.
    GroupDiscount(GroupShare),
    /// Every complete group of `group_size` units charged `offer_price`.
    FlatGroupOffer {
        group_size: NonZeroU64,
        offer_price: Decimal,
    },
}

impl DiscountPolicy {
    /// Three for the price of two.
    pub const fn three_for_two() -> Self {
        Self::GroupDiscount(GroupShare::THREE_FOR_TWO)
    }

    /// Every complete group of `group_size` units charged as `charged_units`.
    ///
    /// # Errors
    ///
    /// Same as [`GroupShare::new`].
    pub fn group_discount(group_size: u64, charged_units: u64) -> Result<Self, PolicyError> {
        GroupShare::new(group_size, charged_units).map(Self::GroupDiscount)
    }

    /// Three for `offer_price`.
    pub const fn three_for(offer_price: Decimal) -> Self {
        Self::FlatGroupOffer {
            group_size: rules::THREE,
            offer_price,
        }
    }

    /// Prices `count` units at `unit_price` under this policy.
    pub fn evaluate(&self, count: u64, unit_price: Decimal) -> RuleOutcome {
        match *self {
            Self::NoDiscount => RuleOutcome {
                total: Decimal::from(count) * unit_price,
                warning: None,
            },
            Self::GroupDiscount(share) => RuleOutcome {
                total: rules::group_discount(count, unit_price, share),
                warning: None,
            },
            Self::FlatGroupOffer {
                group_size,
                offer_price,
            } => rules::flat_group_offer(count, unit_price, group_size, offer_price),
        }
    }
}
