//! Medboard Web - HTTP server for the medicine list page.
//!
//! Serves the page at `/`, fetching the upstream list on every request.
//! With `--once`, performs a single page load and prints the HTML instead.

use std::io::Write;

use axum::http::Request;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use medboard_web::render::{self, Container};
use medboard_web::{AppState, Config, LoadState, router};

/// Medboard Web - static HTML page for an upstream medicine list.
#[derive(Parser, Debug)]
#[command(name = "medboard-web")]
#[command(about = "Renders a medicine list from a JSON endpoint as HTML", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,

    /// Perform one page load, write the HTML to stdout, and exit.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing; stdout is reserved for the page in --once mode
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    // Create application state
    let state = AppState::new(config)?;

    if args.once {
        return render_once(&state).await;
    }

    // Build router with middleware
    let app = router(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting medicine board server");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Single page load written to stdout.
async fn render_once(state: &AppState) -> anyhow::Result<()> {
    let mut container = Container::default();
    let (load_state, outcome) = state.loader.load(&mut container).await;

    let markup = render::page(
        &state.config.site_name,
        &container,
        outcome.summary().as_ref(),
    );

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(markup.into_string().as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    match load_state {
        LoadState::ErrorShown { message } => anyhow::bail!("page load failed: {message}"),
        _ => Ok(()),
    }
}
