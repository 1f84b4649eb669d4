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

//! Checkout session integration tests.

use checkout_demo_rs::{
    CheckoutSession, DiscountPolicy, PriceTable, Pricer, PricingError, ProductCode, checkout_total,
};
use rust_decimal_macros::dec;

fn standard_session() -> CheckoutSession {
    CheckoutSession::new(PriceTable::from([("A", 25), ("B", 40), ("P", 30)]))
}

fn sorted(codes: &[ProductCode]) -> Vec<&str> {
    let mut codes: Vec<&str> = codes.iter().map(ProductCode::as_str).collect();
    codes.sort_unstable();
    codes
}

#[test]
fn scan_then_total() {
    let mut session = standard_session();
    for code in ["B", "A", "B", "P", "B"] {
        session.scan(code).unwrap();
    }

    assert_eq!(sorted(session.scanned()), ["A", "B", "B", "B", "P"]);
    assert_eq!(session.total(), Ok(dec!(155.0)));

    session.scan("B").unwrap();
    assert_eq!(session.total(), Ok(dec!(195.0)));
}

#[test]
fn scan_order_is_preserved() {
    let mut session = standard_session();
    for code in ["P", "A", "B"] {
        session.scan(code).unwrap();
    }

    let scanned: Vec<&str> = session.scanned().iter().map(ProductCode::as_str).collect();
    assert_eq!(scanned, ["P", "A", "B"]);
}

#[test]
fn scan_unpriced_code_fails_without_mutation() {
    let mut session = standard_session();
    session.scan("A").unwrap();

    let result = session.scan("D");
    assert_eq!(result, Err(PricingError::MissingPrice(ProductCode::from("D"))));
    assert_eq!(session.len(), 1);
    assert_eq!(session.total(), Ok(dec!(25)));
}

#[test]
fn total_between_scans_tracks_every_scan() {
    let mut session = standard_session();
    let expected = [dec!(40), dec!(80), dec!(100), dec!(140), dec!(180), dec!(200)];

    for total in expected {
        session.scan("B").unwrap();
        assert_eq!(session.total(), Ok(total));
    }
}

#[test]
fn total_does_not_consume_scans() {
    let mut session = standard_session();
    session.scan("P").unwrap();

    assert_eq!(session.total(), session.total());
    assert_eq!(session.len(), 1);
}

#[test]
fn session_total_matches_batch_total() {
    let codes = ["B", "A", "A", "A", "P", "A", "B"];
    let mut session = standard_session();
    for code in codes {
        session.scan(code).unwrap();
    }

    assert_eq!(session.total(), checkout_total(&codes, session.prices()));
}

#[test]
fn session_quote_breakdown() {
    let mut session = standard_session();
    for code in ["A", "A", "A", "A"] {
        session.scan(code).unwrap();
    }

    let quote = session.quote().unwrap();
    assert_eq!(quote.total(), dec!(75));
    let line = quote.line("A").unwrap();
    assert_eq!(line.quantity, 4);
    assert_eq!(line.subtotal, dec!(75));
    assert!(quote.warnings().is_empty());
}

#[test]
fn session_surfaces_unfavourable_offer() {
    let pricer = Pricer::standard().with_policy("B", DiscountPolicy::three_for(dec!(150)));
    let mut session =
        CheckoutSession::with_pricer(PriceTable::from([("A", 25), ("B", 40), ("P", 30)]), pricer);
    for code in ["B", "B", "B"] {
        session.scan(code).unwrap();
    }

    let quote = session.quote().unwrap();
    assert_eq!(quote.total(), dec!(150));
    assert_eq!(quote.warnings().get("B").map(|w| w.undiscounted), Some(dec!(120)));
}
