use clap::{Args, Parser, Subcommand};
use engine::{Money, PriceBreakdown, PricingConfig, PricingEngine, ServiceCategory};
use serde::Deserialize;

use crate::error::Result;

mod error;

#[derive(Parser, Debug)]
#[command(name = "washmate_cli")]
#[command(about = "Quote services and inspect the WashMate pricing tables")]
struct Cli {
    /// Settings file with an optional `[pricing]` section (also read from `WASHMATE_CONFIG`).
    #[arg(long, env = "WASHMATE_CONFIG", default_value = "settings")]
    config: String,

    /// Log filter for the engine (e.g. `debug`).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price one service.
    Quote(QuoteArgs),
    /// List the services of a category.
    Catalog(CatalogArgs),
    /// List the promo codes.
    Promos,
    /// Format an amount given in rupees.
    Format(FormatArgs),
}

#[derive(Args, Debug)]
struct QuoteArgs {
    #[arg(long)]
    category: ServiceCategory,
    #[arg(long)]
    service: String,
    #[arg(long)]
    promo: Option<String>,
    /// Print the breakdown as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    #[arg(long)]
    category: ServiceCategory,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Amount in rupees, e.g. `199`, `₹199.50` or `199,5`.
    amount: Money,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
    pricing: PricingConfig,
}

fn load_engine(path: &str) -> Result<PricingEngine> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("WASHMATE").separator("__"))
        .build()?
        .try_deserialize()?;
    Ok(settings.pricing.build_engine()?)
}

fn render_breakdown(engine: &PricingEngine, quote: &PriceBreakdown) -> String {
    let line = |label: &str, amount: Money| {
        format!("{label:<10}{:>12}  ({} paise)", engine.format_price(amount), amount.minor())
    };
    let mut out = vec![format!("{} [{}]", quote.display_name, quote.category)];
    out.push(line("base", quote.base_price));
    let discount_label = match &quote.promo_code {
        Some(code) => format!("discount {} via {code}", quote.discount_rate),
        None => format!("discount {}", quote.discount_rate),
    };
    out.push(format!("  {discount_label}"));
    out.push(line("discount", quote.discount));
    out.push(line("subtotal", quote.subtotal));
    out.push(line("taxes", quote.taxes));
    out.push(line("total", quote.total));
    out.join("\n")
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("engine={}", cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    let engine = load_engine(&cli.config)?;

    match cli.command {
        Command::Quote(args) => {
            let quote = match engine.calculate_service_price(
                &args.service,
                args.category,
                args.promo.as_deref(),
            ) {
                Ok(quote) => quote,
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!("{}", render_breakdown(&engine, &quote));
            }
        }
        Command::Catalog(args) => {
            for entry in engine.catalog().entries(args.category) {
                let discount = match entry.discount_rate {
                    Some(rate) => format!(" -{rate}"),
                    None => String::new(),
                };
                println!(
                    "{:<22}{:<32}{:>10}  tax {}{discount}",
                    entry.id,
                    entry.display_name(),
                    engine.format_price(entry.base_price),
                    entry.tax_rate
                );
            }
        }
        Command::Promos => {
            for rule in engine.promos().rules() {
                let scope = if rule.categories.is_empty() {
                    "any".to_string()
                } else {
                    rule.categories
                        .iter()
                        .map(|category| category.as_str())
                        .collect::<Vec<_>>()
                        .join(",")
                };
                println!("{:<14}{:<16}{}", rule.code, scope, rule.rate);
            }
        }
        Command::Format(args) => {
            println!(
                "{} ({} paise)",
                engine.format_price(args.amount),
                args.amount.minor()
            );
        }
    }

    Ok(())
}
