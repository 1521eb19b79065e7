use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use unitprice::calc;
use unitprice::config::Config;
use unitprice::display::{Locale, ReportFormatter};

#[derive(Parser)]
#[command(name = "unitprice")]
#[command(about = "Compare two products by price per 100 grams", long_about = None)]
struct Cli {
    /// Display locale (ja or en), overrides the config file
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Config file (default: ./unitprice.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two products
    Compare {
        /// Weight of product 1 in grams
        #[arg(allow_hyphen_values = true)]
        weight_a: String,

        /// Price of product 1
        #[arg(allow_hyphen_values = true)]
        price_a: String,

        /// Weight of product 2 in grams
        #[arg(allow_hyphen_values = true)]
        weight_b: String,

        /// Price of product 2
        #[arg(allow_hyphen_values = true)]
        price_b: String,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Price per 100 g for a single product
    Unit {
        /// Weight in grams
        #[arg(allow_hyphen_values = true)]
        weight: String,

        /// Price
        #[arg(allow_hyphen_values = true)]
        price: String,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read "weight_a price_a weight_b price_b" lines from stdin and report after each
    Watch,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let formatter = load_formatter(cli.config.as_deref(), cli.locale)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Compare {
            weight_a,
            price_a,
            weight_b,
            price_b,
            json,
        } => compare(
            &mut out,
            &formatter,
            [&weight_a, &price_a, &weight_b, &price_b].map(String::as_str),
            json,
        ),
        Commands::Unit {
            weight,
            price,
            json,
        } => unit(&mut out, &formatter, &weight, &price, json),
        Commands::Watch => watch_lines(std::io::stdin().lock(), &mut out, &formatter),
    }
}

fn load_formatter(
    config_path: Option<&std::path::Path>,
    locale: Option<Locale>,
) -> Result<ReportFormatter, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let mut config = Config::resolve(config_path, &cwd)?;

    if let Some(locale) = locale {
        log::debug!("Locale overridden on command line: {}", locale);
        config.locale = locale;
    }

    Ok(ReportFormatter::from_config(&config))
}

fn compare<W: Write>(
    out: &mut W,
    formatter: &ReportFormatter,
    [weight_a, price_a, weight_b, price_b]: [&str; 4],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = calc::compute_comparison(weight_a, price_a, weight_b, price_b);
    log::debug!("Computed {:?}", result);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        writeln!(out, "{}", formatter.render(&result))?;
    }

    Ok(())
}

fn unit<W: Write>(
    out: &mut W,
    formatter: &ReportFormatter,
    weight: &str,
    price: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let unit_price =
        calc::calculate_unit_price(calc::parse_weight(weight), calc::parse_price(price));

    if json {
        let value = serde_json::json!({ "unitPrice": unit_price });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(out, "{}", formatter.format_unit_price(unit_price))?;
    }

    Ok(())
}

/// Report after every input line. Undecodable bytes become placeholders
/// instead of ending the stream.
fn watch_lines<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    formatter: &ReportFormatter,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.split(b'\n') {
        let bytes = line?;
        let line = String::from_utf8_lossy(&bytes);
        let [weight_a, price_a, weight_b, price_b] = split_fields(&line);

        let result = calc::compute_comparison(weight_a, price_a, weight_b, price_b);
        writeln!(out, "{}\n", formatter.render(&result))?;
        out.flush()?;
    }

    Ok(())
}

/// Up to four whitespace-separated fields; missing ones and "-" are empty text
fn split_fields(line: &str) -> [&str; 4] {
    let mut fields = [""; 4];
    for (slot, field) in fields.iter_mut().zip(line.split_whitespace()) {
        *slot = if field == "-" { "" } else { field };
    }
    fields
}
