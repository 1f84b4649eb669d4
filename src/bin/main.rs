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

use checkout_demo_rs::{CheckoutSession, DiscountPolicy, PriceTable, Pricer, Quote};
use clap::Parser;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Checkout - Price a basket of scanned items
///
/// Reads unit prices from a CSV file, scans the given product codes and
/// writes the total after promotions to stdout.
#[derive(Parser, Debug)]
#[command(name = "checkout-demo-rs")]
#[command(about = "Prices scanned product codes under multi-buy promotions", long_about = None)]
struct Args {
    /// Path to CSV file with unit prices
    ///
    /// Expected format: code,price
    /// Example: cargo run -- prices.csv B A B P B
    #[arg(value_name = "PRICES")]
    prices: PathBuf,

    /// Scanned product codes, in scan order
    #[arg(value_name = "CODE")]
    codes: Vec<String>,

    /// Price of three `B` items
    #[arg(long, value_name = "PENCE", value_parser = parse_offer_price)]
    offer_price: Option<Decimal>,

    /// Write one CSV row per product before the total
    #[arg(long)]
    itemised: bool,
}

/// Offer prices follow the same rule as price file rows: no negatives.
fn parse_offer_price(value: &str) -> Result<Decimal, String> {
    let price: Decimal = value.parse().map_err(|e| format!("{e}"))?;
    if price.is_sign_negative() {
        return Err(format!("offer price must not be negative: {price}"));
    }
    Ok(price)
}

impl Args {
    fn pricer(&self) -> Pricer {
        let pricer = Pricer::standard();
        match self.offer_price {
            Some(offer_price) => pricer.with_policy("B", DiscountPolicy::three_for(offer_price)),
            None => pricer,
        }
    }
}

fn main() {
    init_tracing();

    // Parse command line arguments
    let args = Args::parse();

    let file = match File::open(&args.prices) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", args.prices.display(), e);
            process::exit(1);
        }
    };

    let prices = match load_prices(BufReader::new(file)) {
        Ok(prices) => prices,
        Err(e) => {
            eprintln!("Error reading prices: {}", e);
            process::exit(1);
        }
    };

    let mut session = CheckoutSession::with_pricer(prices, args.pricer());
    for code in &args.codes {
        if let Err(e) = session.scan(code) {
            eprintln!("Error scanning '{}': {}", code, e);
            process::exit(1);
        }
    }

    let quote = match session.quote() {
        Ok(quote) => quote,
        Err(e) => {
            eprintln!("Error pricing basket: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_quote(&quote, args.itemised, std::io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine readable.
///
/// Filtered by `RUST_LOG`, `warn` by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Raw CSV record matching the price file format.
///
/// Fields: `code, price`
#[derive(Debug, Deserialize)]
struct PriceRecord {
    code: String,
    price: Decimal,
}

/// Reads a price table from CSV.
///
/// Malformed rows, blank codes and negative prices are skipped with a
/// warning. A later row for the same code replaces the earlier price.
///
/// # Example
///
/// ```csv
/// code,price
/// A,25
/// B,40
/// P,30
/// ```
///
/// # Errors
///
/// Returns a CSV error if the reader fails.
pub fn load_prices<R: Read>(reader: R) -> Result<PriceTable, csv::Error> {
    let mut prices = PriceTable::new();

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(reader);

    for result in rdr.deserialize::<PriceRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed price row");
                continue;
            }
        };

        if record.code.is_empty() || record.price.is_sign_negative() {
            tracing::warn!(code = %record.code, price = %record.price, "skipping invalid price row");
            continue;
        }
        prices.insert(record.code, record.price);
    }

    Ok(prices)
}

/// Writes the quote total, optionally preceded by per-product rows.
///
/// # CSV Format
///
/// Columns: `code, quantity, unit_price, subtotal`, closed by a `total` row
/// holding the item count and grand total.
///
/// ```csv
/// code,quantity,unit_price,subtotal
/// A,1,25,25
/// B,3,40,100
/// P,1,30,30
/// total,5,,155
/// ```
///
/// Without `itemised` only the grand total is written.
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_quote<W: Write>(quote: &Quote, itemised: bool, mut writer: W) -> Result<(), csv::Error> {
    if !itemised {
        writeln!(writer, "{}", quote.total())?;
        return Ok(());
    }

    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["code", "quantity", "unit_price", "subtotal"])?;
    for line in quote.lines() {
        wtr.serialize(line)?;
    }

    let items: u64 = quote.lines().iter().map(|line| line.quantity).sum();
    wtr.write_record(["total", &items.to_string(), "", &quote.total().to_string()])?;

    wtr.flush()?;
    Ok(())
}
