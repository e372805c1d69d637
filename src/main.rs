use std::io;
use std::path::PathBuf;
use std::process;

use chrono::{Duration, Local};
use clap::Parser;
use tracing::{error, info};

use mercury_export::client::{BASE_URL, Client};
use mercury_export::error::ExportError;
use mercury_export::fetch::fetch_all;
use mercury_export::io::export_csv;
use mercury_export::logging;
use mercury_export::prompt;
use mercury_export::summary::Summary;

#[derive(Parser)]
#[command(name = "mercury-export", version, about = "Fetch Mercury bank transactions and export them to CSV")]
struct Args {
    /// Mercury API key; prompted for interactively when absent.
    #[arg(long, env = "MERCURY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API base URL.
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Log file path.
    #[arg(long, default_value = "mercury_api.log")]
    log_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let _guard = logging::init(&args.log_file).unwrap_or_else(|e| {
        eprintln!("Error opening log file {}: {e}", args.log_file.display());
        process::exit(1);
    });

    if let Err(e) = run(&args) {
        error!("{e}");
        println!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ExportError> {
    info!("starting Mercury transaction export");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let api_key = match &args.api_key {
        Some(key) => key.clone(),
        None => prompt::prompt_line(&mut input, &mut output, "Enter your Mercury API key: ")?,
    };

    let client = Client::with_base_url(&args.base_url, api_key);

    let accounts = client.accounts()?;
    println!("Found {} accounts", accounts.len());
    for (i, account) in accounts.iter().enumerate() {
        println!("{}. {} (ID: {})", i + 1, account.name, account.id);
    }

    let account_id = prompt::select_account(&mut input, &mut output, &accounts)?;

    let today = Local::now().date_naive();
    let default_start = today - Duration::days(30);
    let start_date = prompt::prompt_date(
        &mut input,
        &mut output,
        &format!("\nEnter start date (YYYY-MM-DD) or press Enter for default ({default_start}): "),
        default_start,
    )?;
    let end_date = prompt::prompt_date(
        &mut input,
        &mut output,
        "Enter end date (YYYY-MM-DD) or press Enter for today: ",
        today,
    )?;

    info!(%start_date, %end_date, "fetching transactions for date range");
    println!("\nFetching transactions from {start_date} to {end_date}...");

    let transactions = fetch_all(
        &client,
        account_id.as_deref().unwrap_or_default(),
        Some(start_date),
        Some(end_date),
    )?;

    print!("{}", Summary::of(&transactions).render());

    if prompt::confirm(
        &mut input,
        &mut output,
        "\nDo you want to save transactions to CSV? (y/n): ",
    )? {
        let filename = prompt::prompt_line(
            &mut input,
            &mut output,
            "Enter filename (default: transactions.csv): ",
        )?;
        let filename = if filename.is_empty() {
            "transactions.csv".to_string()
        } else {
            filename
        };

        if transactions.is_empty() {
            println!("No transactions to save.");
        } else {
            export_csv(&filename, &transactions)?;
            println!("Saved {} transactions to {filename}", transactions.len());
        }
    }

    Ok(())
}
