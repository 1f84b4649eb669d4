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

//! Error types for checkout pricing.

use crate::base::ProductCode;
use std::fmt;
use thiserror::Error;

/// Pricing precondition failures.
///
/// Both variants are detected before any total is computed, so an error
/// never comes with a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Code is outside the set of products the pricer knows a policy for
    #[error("unrecognised product code '{code}' (allowed codes: {allowed})")]
    UnrecognizedProduct {
        code: ProductCode,
        allowed: AllowedCodes,
    },

    /// Code has no entry in the price table
    #[error("no price entry for product code '{0}'")]
    MissingPrice(ProductCode),
}

/// Invalid discount policy configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// Group size of zero
    #[error("group size must be at least 1")]
    EmptyGroup,

    /// "N for M" with M > N would charge more than full price
    #[error("cannot charge {charged_units} units for a group of {group_size}")]
    ChargedExceedsGroup { group_size: u64, charged_units: u64 },
}

/// The allowed product codes, rendered as `{A, B, P}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedCodes(pub Vec<ProductCode>);

impl fmt::Display for AllowedCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{code}")?;
        }
        f.write_str("}")
    }
}
