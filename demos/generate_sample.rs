use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{Datelike, Months, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Value};

const PROBABILITY_REINVEST: f64 = 0.4;
const PROBABILITY_REDEMPTION: f64 = 0.05;
const PROBABILITY_TAX: f64 = 0.1;
const PROBABILITY_UNCLASSIFIED: f64 = 0.03;
const PROBABILITY_INVALID: f64 = 0.01;

const FIRST_NAMES: [&str; 8] = ["Brian", "Bennett", "Stelck", "Maren", "Oscar", "Delia", "Harlan", "Inez"];
const LAST_NAMES: [&str; 8] = ["Schmidt", "Williamson", "Boeger", "Lindqvist", "Okafor", "Reyes", "Whitcomb", "Navarro"];
const INVESTMENT: &str = "Alturas Real Estate Fund (01-aref )";

struct GeneratorConfig {
    num_investors: usize,
    num_quarters: u32,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_investors = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);
        let num_quarters = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(24);

        Self {
            num_investors,
            num_quarters,
            output_path: "samples/generated.json".to_string(),
        }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!(
        "Generating {} quarters of history for {} investors in {}...",
        config.num_quarters, config.num_investors, config.output_path
    );

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let mut rng = rand::rng();
    let mut records = Vec::new();
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();

    for investor_id in 0..config.num_investors {
        let investor = investor_name(&mut rng, investor_id);
        let mut balance = Decimal::ZERO;

        let opening = (random_amount(&mut rng, 50.0, 1_000.0).round() * Decimal::from(1_000)).round_dp(2);
        records.push(record(&investor, "Contribution - Equity", opening, start + chrono::Days::new(rng.random_range(0..80))));
        balance += opening;

        for quarter in 0..config.num_quarters {
            let quarter_end = quarter_end(start, quarter);
            balance = generate_quarter(&mut rng, &mut records, &investor, balance, quarter_end);
        }
    }

    let file = File::create(&config.output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;

    println!("Generation complete: {} records.", records.len());

    Ok(())
}

fn investor_name<R: Rng>(rng: &mut R, investor_id: usize) -> String {
    let first = FIRST_NAMES.choose(rng).unwrap();
    let last = LAST_NAMES.choose(rng).unwrap();

    format!("{first} {last} Family Trust (i{investor_id})")
}

fn quarter_end(start: NaiveDate, quarter: u32) -> NaiveDate {
    let next_quarter = start + Months::new((quarter + 1) * 3);
    next_quarter.pred_opt().unwrap()
}

fn generate_quarter<R: Rng>(rng: &mut R, records: &mut Vec<Value>, investor: &str, balance: Decimal, quarter_end: NaiveDate) -> Decimal {
    let mut balance = balance;
    let income = (balance * Decimal::from_f64(rng.random_range(0.01..0.03)).unwrap()).round_dp(2);

    // Income often posts during the first days of the following quarter.
    let income_date = if rng.random_bool(0.3) {
        quarter_end + chrono::Days::new(rng.random_range(1..=5))
    } else {
        quarter_end
    };

    if rng.random_bool(PROBABILITY_REINVEST) {
        records.push(record(investor, "Income Reinvestment", income, income_date));
        balance += income;
    } else {
        records.push(record(investor, "Income Paid", income, income_date));
    }

    let unrealized = balance * Decimal::from_f64(rng.random_range(-0.02..0.04)).unwrap();
    records.push(record(investor, "Unrealized Gains/Losses", unrealized.round_dp(2), quarter_end));

    if rng.random_bool(PROBABILITY_REDEMPTION) {
        let redemption = (balance * Decimal::from_f64(rng.random_range(0.05..0.25)).unwrap()).round_dp(2);
        records.push(record(investor, "Redemption - GAAP", redemption, quarter_end));
        balance -= redemption;
    }

    if rng.random_bool(PROBABILITY_TAX) {
        records.push(record(investor, "Tax Increase/Decrease", -random_amount(rng, 50.0, 2_000.0), quarter_end));
    }

    if rng.random_bool(PROBABILITY_UNCLASSIFIED) {
        records.push(record(investor, "Distribution - Preferred Return", random_amount(rng, 100.0, 5_000.0), quarter_end));
    }

    if rng.random_bool(PROBABILITY_INVALID) {
        records.push(invalid_record(rng, investor, quarter_end));
    }

    balance
}

fn random_amount<R: Rng>(rng: &mut R, min: f64, max: f64) -> Decimal {
    Decimal::from_f64(rng.random_range(min..max)).unwrap().round_dp(2)
}

fn export_date(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y 00:00:00 GMT").to_string()
}

fn export_amount(amount: Decimal) -> String {
    let rendered = format!("{:.2}", amount.abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

fn record(investor: &str, transaction_type: &str, amount: Decimal, date: NaiveDate) -> Value {
    json!({
        "Actual_Transaction_Amount": export_amount(amount),
        "Effective_Date": export_date(date),
        "Investment": INVESTMENT,
        "Investor": investor,
        "Tran_Date": export_date(date),
        "Transaction_Type": transaction_type,
        "Year": date.year()
    })
}

fn invalid_record<R: Rng>(rng: &mut R, investor: &str, date: NaiveDate) -> Value {
    let invalid_records = [
        json!({ "Actual_Transaction_Amount": "n/a", "Effective_Date": export_date(date), "Investor": investor, "Transaction_Type": "Income Paid" }),
        json!({ "Actual_Transaction_Amount": "1,000.00", "Effective_Date": "pending", "Investor": investor, "Transaction_Type": "Income Paid" }),
        json!({ "Actual_Transaction_Amount": 1000, "Investor": investor, "Transaction_Type": "Income Paid" }),
        json!("junk"),
    ];

    invalid_records.choose(rng).unwrap().clone()
}
