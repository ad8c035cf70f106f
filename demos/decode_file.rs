//! Decode a `.sta` file and print its transactions.
//!
//! ```text
//! cargo run --example decode_file -- statement.sta
//! RUST_LOG=mt940_pl=debug cargo run --example decode_file -- statement.sta
//! ```
//!
//! Without an argument a small built-in CP852 statement is decoded.

use mt940_pl::encoding::{ResolverConfig, resolve};
use mt940_pl::mt940::decode_statement;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ":86:" narrative "~20Płatność kartą~32SKLEP ŻABKA~33Łódź" in CP852
const SAMPLE: &[u8] = b":20:DEMO\n:25:PL27114020040000330212345678\n:60F:C250706PLN585,42\n\
:61:2507060707D12,99S073REF1\n:86:073\n~20P\x88atno\x98\x86 kart\xA5\n\
~21Nr karty 4246xx1115\n~32SKLEP \xBDABKA~33\x9D\xA2d\xAB\n\
:61:2507070707C3500,00S020NONREF\n:86:020\n~20Wynagrodzenie\n~32ACME SP. Z O.O.\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mt940_pl=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bytes = match std::env::args().nth(1) {
        Some(path) => std::fs::read(&path)?,
        None => SAMPLE.to_vec(),
    };

    let resolution = resolve(&bytes, &ResolverConfig::default())?;
    println!(
        "Encoding: {} (score {})",
        resolution.codepage, resolution.score
    );

    let statement = decode_statement(&resolution.text);
    println!(
        "Account:  {}",
        statement.account_id.as_deref().unwrap_or("-")
    );
    if let Some(balance) = &statement.opening_balance {
        println!(
            "Opening:  {} {} {} on {}",
            balance.debit_credit.mark(),
            balance.amount,
            balance.currency,
            balance.date
        );
    }

    println!("\n{} transaction(s):", statement.transactions.len());
    for tx in &statement.transactions {
        println!(
            "  {}  {:>12}  {}  {}",
            tx.value_date,
            tx.signed_amount().to_string(),
            tx.description.as_deref().unwrap_or(""),
            tx.counterparty_name.as_deref().unwrap_or("")
        );
    }

    let json = serde_json::to_string_pretty(&statement)?;
    println!("\n{json}");

    Ok(())
}
