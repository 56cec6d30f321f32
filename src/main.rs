use anyhow::{Context, Result};
use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Attendance classification service.
#[derive(Debug, Parser)]
#[command(name = "attendance-engine", version, about)]
struct Args {
    /// Directory containing shifts.yaml
    #[arg(long, env = "ATTENDANCE_CONFIG_DIR", default_value = "./config/default")]
    config_dir: String,

    /// Address to listen on
    #[arg(long, env = "ATTENDANCE_BIND", default_value = "0.0.0.0:3000")]
    bind: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "attendance_engine=debug,info"
    } else {
        "attendance_engine=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = ConfigLoader::load(&args.config_dir)
        .with_context(|| format!("loading shift configuration from {}", args.config_dir))?;

    match config.active_shift() {
        Ok(shift) => info!(
            shift_id = %shift.id,
            start = %shift.start_time,
            end = %shift.end_time,
            grace_minutes = shift.grace_minutes,
            "Active shift"
        ),
        Err(err) => warn!(error = %err, "No active shift; marking will be rejected"),
    }

    let app = create_router(AppState::new(config));
    let listener = TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    info!("Attendance engine listening on {}", args.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
