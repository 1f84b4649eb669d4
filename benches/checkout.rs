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

//! Benchmarks for checkout pricing.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Single rule evaluation
//! - Batch totals scaling with basket size
//! - Session scan-then-total, which reprices the whole basket every call

use checkout_demo_rs::{
    CheckoutSession, PriceTable, Pricer, apply_flat_group_offer, apply_group_discount,
    checkout_total,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

// =============================================================================
// Helper Functions
// =============================================================================

const CODES: [&str; 3] = ["A", "B", "P"];

fn standard_prices() -> PriceTable {
    PriceTable::from([("A", 25), ("B", 40), ("P", 30)])
}

fn make_basket(size: usize) -> Vec<&'static str> {
    (0..size).map(|i| CODES[i % CODES.len()]).collect()
}

// =============================================================================
// Rule Benchmarks
// =============================================================================

fn bench_rules(c: &mut Criterion) {
    c.bench_function("group_discount", |b| {
        b.iter(|| apply_group_discount(black_box(1_000), black_box(Decimal::from(25))))
    });

    c.bench_function("flat_group_offer", |b| {
        b.iter(|| {
            apply_flat_group_offer(
                black_box(1_000),
                black_box(Decimal::from(40)),
                black_box(Decimal::from(100)),
            )
        })
    });
}

// =============================================================================
// Checkout Benchmarks
// =============================================================================

fn bench_checkout_total(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkout_total");
    let prices = standard_prices();

    for size in [10, 1_000, 100_000].iter() {
        let basket = make_basket(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &basket, |b, basket| {
            b.iter(|| checkout_total(black_box(basket.as_slice()), &prices).unwrap())
        });
    }
    group.finish();
}

fn bench_quote(c: &mut Criterion) {
    let pricer = Pricer::standard();
    let prices = standard_prices();
    let basket = make_basket(1_000);

    c.bench_function("quote_1000", |b| {
        b.iter(|| pricer.quote(black_box(basket.as_slice()), &prices).unwrap())
    });
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_scan_and_total");

    for size in [10, 100, 1_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut session = CheckoutSession::new(standard_prices());
                for code in make_basket(size) {
                    session.scan(code).unwrap();
                    black_box(session.total().unwrap());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_rules,
    bench_checkout_total,
    bench_quote,
    bench_session,
);
criterion_main!(benches);
