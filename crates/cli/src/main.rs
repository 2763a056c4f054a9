mod render;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use eth_dashboard_core::models::event::DashboardEvent;
use eth_dashboard_core::models::settings::DashboardConfig;
use eth_dashboard_core::models::state::{ForecastInterval, Tab};
use eth_dashboard_core::session::DashboardSession;
use eth_dashboard_core::Dashboard;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    Simple,
    Full,
}

/// Render the ETH learning-portfolio dashboard in the terminal.
#[derive(Debug, Parser)]
#[command(name = "eth-dashboard", version, about)]
struct Args {
    /// JSON config file; overrides --variant
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Variant::Full)]
    variant: Variant,

    /// Seed for the mock series
    #[arg(long)]
    seed: Option<u64>,

    /// How long to keep the dashboard mounted
    #[arg(long, default_value_t = 3)]
    seconds: u64,

    /// Tab to open after mount (forecasting, holdings, learning, monitoring, decisions)
    #[arg(long)]
    tab: Option<Tab>,

    /// Emergency-fund threshold, as typed into the field
    #[arg(long)]
    threshold: Option<String>,

    /// Forecast interval label (1h, 6h, 1d)
    #[arg(long)]
    interval: Option<ForecastInterval>,

    /// Checklist item ids to tick off
    #[arg(long = "check")]
    checks: Vec<String>,

    /// Press "Update Forecast" once after mount
    #[arg(long)]
    update_forecast: bool,
}

fn load_config(args: &Args) -> Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => match args.variant {
            Variant::Simple => DashboardConfig::simple(),
            Variant::Full => DashboardConfig::full(),
        },
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let dashboard = Dashboard::mount(config).await?;
    let mut session = DashboardSession::mount(dashboard);
    let sender = session.sender();

    if let Some(tab) = args.tab {
        sender.send(DashboardEvent::SelectTab(tab));
    }
    if let Some(text) = &args.threshold {
        sender.send(DashboardEvent::SetThreshold(text.clone()));
    }
    if let Some(interval) = args.interval {
        sender.send(DashboardEvent::SetForecastInterval(interval));
    }
    for id in &args.checks {
        sender.send(DashboardEvent::ToggleChecklistItem(id.clone()));
    }
    if args.update_forecast {
        sender.send(DashboardEvent::RequestForecastUpdate);
    }
    session.process_pending();

    print!("{}", render::frame(session.dashboard()));

    let deadline = tokio::time::sleep(Duration::from_secs(args.seconds));
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            outcome = session.next_event() => {
                if outcome.is_none() {
                    break;
                }
                println!("{}", render::clock_line(session.dashboard()));
            }
        }
    }

    let dashboard = session.unmount();
    info!(ticks = dashboard.tick_count(), "session finished");
    print!("{}", render::footer(&dashboard));
    Ok(())
}
