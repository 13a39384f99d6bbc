use std::{io, path::PathBuf, process::ExitCode};

use clap::{error::ErrorKind, CommandFactory, Parser};

use compute_sales::{init_logger, run, Config, Order, RESULTS_FILE};

/// Totals a sales record against a price catalogue and saves the report.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON array of {"title", "price"} objects
    price_catalogue: PathBuf,
    /// JSON array of {"Product", "Quantity"} objects
    sales_record: PathBuf,
    /// Where to save the report
    #[arg(short, long, default_value = RESULTS_FILE)]
    output: PathBuf,
    /// Order of the product rows
    #[arg(long, value_enum, default_value_t)]
    order: Order,
    /// Log debug diagnostics to standard error
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{}", Args::command().render_usage());
            return ExitCode::from(2);
        }
    };
    init_logger(args.verbose);
    tracing::debug!(?args, "starting");

    let config = Config {
        catalogue: args.price_catalogue,
        sales: args.sales_record,
        output: args.output,
        order: args.order,
    };
    match run(&config, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
