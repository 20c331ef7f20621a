use crate::api::{ApiClient, SearchParams};
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::renderer::ScriptBackend;
use crate::view::View;
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod api;
mod charts;
mod dashboard;
mod error;
mod pivot;
mod record;
mod renderer;
mod table;
mod templates;
mod view;

/// Fetch watermelon prices and write them out as a table and a chart page.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the prices API.
    #[arg(
        long,
        env = "WATERMELON_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "WATERMELON_TIMEOUT", default_value_t = 10)]
    timeout: u64,

    /// Where the HTML page is written.
    #[arg(short, long, default_value = "index.html")]
    output: PathBuf,

    /// View shown when the page opens.
    #[arg(long, value_enum, default_value_t = View::Chart)]
    view: View,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// All records.
    Load,
    /// Records matching the given filters.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(long, default_value = "")]
    start_year: String,
    #[arg(long, default_value = "")]
    end_year: String,
    #[arg(long, default_value = "")]
    price: String,
    #[arg(long = "type", default_value = "")]
    kind: String,
}

impl From<SearchArgs> for SearchParams {
    fn from(args: SearchArgs) -> Self {
        SearchParams {
            start_year: args.start_year,
            end_year: args.end_year,
            price: args.price,
            kind: args.kind,
        }
    }
}

fn main() {
    env_logger::init();
    let now = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("done in {}ms", now.elapsed().as_millis());
}

fn run(cli: Cli) -> Result<()> {
    let client = ApiClient::new(&cli.api_url, Duration::from_secs(cli.timeout))?;
    let mut dashboard = Dashboard::new(client, ScriptBackend);

    match cli.command {
        None | Some(Command::Load) => dashboard.on_load(),
        Some(Command::Search(args)) => dashboard.on_search(&args.into()),
    }
    dashboard.on_view_click(cli.view);

    fs::write(&cli.output, dashboard.to_html().into_string())?;
    info!(
        "written {:?} with {} rows, {:?} view",
        cli.output,
        dashboard.table().rows().len(),
        dashboard.view().active_view()
    );
    Ok(())
}
