// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, create an API client, dispatch.
// - Maps every failure to exit code 1; clap's default parse-error code is
//   2, so argument errors are re-exited explicitly.

use clap::Parser;
use opengtin_cli::{api::ApiClient, ui};
use std::process;

/// Look up retail product barcodes (EAN/GTIN) on Open Food Facts.
#[derive(Parser, Debug)]
#[command(name = "opengtin-cli", version, about)]
struct Cli {
    /// Product barcode to look up.
    #[arg(value_name = "EAN", required_unless_present = "search", conflicts_with = "search")]
    ean: Option<String>,

    /// Search products by text instead of looking up a barcode.
    #[arg(long, value_name = "TERMS")]
    search: Option<String>,

    /// Restrict search results to one country.
    #[arg(long, value_name = "NAME", requires = "search")]
    country: Option<String>,

    /// Result page to request.
    #[arg(long, value_name = "N", default_value_t = 1, requires = "search")]
    page: u32,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap already renders the usage text; only the exit code
            // needs normalising.
            let _ = err.print();
            process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        // `{:#}` renders the context chain on one line, e.g.
        // "Request failed: <transport error>".
        println!("{err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let api = ApiClient::from_env()?;
    match (cli.search, cli.ean) {
        (Some(terms), _) => ui::search(&api, &terms, cli.country.as_deref(), cli.page),
        (None, Some(ean)) => ui::lookup(&api, &ean),
        // clap rejects this combination before we get here.
        (None, None) => anyhow::bail!("missing EAN argument"),
    }
}
