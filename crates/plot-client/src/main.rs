// crates/plot-client/src/main.rs

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::NaiveDate;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plot_client::{App, Config, PlotBackend};
use plot_core::{Phase, PlotType};

#[derive(Parser)]
#[clap(name = "plot-client")]
#[clap(about = "Fetch a stock chart image from the plotting backend")]
struct Cli {
    /// Ticker symbol (case-insensitive)
    #[clap(short, long)]
    ticker: String,

    /// Start date, YYYY-MM-DD
    #[clap(short, long)]
    start: String,

    /// End date, YYYY-MM-DD
    #[clap(short, long)]
    end: String,

    /// Plot style: line, candlestick or ohlc
    #[clap(short, long, default_value = "line")]
    plot_type: String,

    /// Overlay a moving average
    #[clap(long)]
    show_ma: bool,

    /// Moving-average window, in trading periods (1-200)
    #[clap(long, default_value = "20")]
    ma_period: String,

    /// Include the volume subplot
    #[clap(long)]
    show_volume: bool,

    /// Backend base URL (overrides PLOT_BASE_URL)
    #[clap(long)]
    server: Option<String>,

    /// Where to write the decoded PNG
    #[clap(short, long, default_value = "plot.png")]
    output: PathBuf,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Validate the date arguments at the CLI edge; the form itself only
    // coerces types, it does not know about calendars.
    for (name, value) in [("start", &cli.start), ("end", &cli.end)] {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| anyhow!("--{name} must be a valid YYYY-MM-DD date, got {value:?}"))?;
    }
    let plot_type = PlotType::from_str(&cli.plot_type)
        .ok_or_else(|| anyhow!("--plot-type must be one of: line, candlestick, ohlc"))?;

    let mut config = Config::from_env()?;
    if let Some(server) = cli.server {
        config.base_url = server;
    }

    let backend = PlotBackend::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
    info!(url = %backend.stock_data_url(), "using plotting backend");

    let (req_tx, req_rx) = mpsc::unbounded_channel();
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    tokio::spawn(backend.run(req_rx, outcome_tx));

    let mut app = App::new();
    app.set_network_sender(req_tx);
    app.set_ticker(&cli.ticker);
    app.set_start_date(&cli.start);
    app.set_end_date(&cli.end);
    app.set_plot_type(plot_type);
    app.set_show_moving_average(cli.show_ma);
    app.set_moving_average_period(&cli.ma_period);
    app.set_show_volume(cli.show_volume);

    app.submit()?;

    let outcome = outcome_rx
        .recv()
        .await
        .ok_or_else(|| anyhow!("network task exited without reporting an outcome"))?;
    app.handle_outcome(outcome);

    match app.form().phase {
        Phase::Success => {
            let data_uri = app
                .form()
                .plot_image_data
                .as_deref()
                .ok_or_else(|| anyhow!("success without image data"))?;
            let encoded = data_uri
                .strip_prefix("data:image/png;base64,")
                .unwrap_or(data_uri);
            let bytes = BASE64.decode(encoded)?;
            std::fs::write(&cli.output, &bytes)?;
            println!("wrote {} bytes to {}", bytes.len(), cli.output.display());
            Ok(())
        }
        Phase::Error => {
            let message = app
                .form()
                .error_message
                .as_deref()
                .unwrap_or("unknown error");
            bail!("{message}");
        }
        phase => bail!("session ended in unexpected phase {phase:?}"),
    }
}
