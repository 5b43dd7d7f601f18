use clap::Parser;
use dotenvy::dotenv;
use std::io;
use std::process;
use tmdbget::app;
use tmdbget::cli::{usage_exit_code, Cli};
use tmdbget::config::Config;
use tmdbget::error::{failure_report, EXIT_INTERRUPTED};
use tmdbget::output::emit;
use tmdbget::tmdb::TmdbClient;
use tokio::io::BufReader;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(usage_exit_code(&err));
        }
    }
}

fn fail(err: &anyhow::Error) -> ! {
    let (lines, code) = failure_report(err);
    for line in lines {
        eprintln!("{line}");
    }
    process::exit(code);
}

async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let loaded = dotenv();
    init_tracing();
    match loaded {
        Ok(path) => debug!("Loaded environment from {:?}", path),
        Err(e) => debug!("No .env file loaded ({})", e),
    }

    let cli = parse_cli();
    let config = Config::from_cli(cli).unwrap_or_else(|e| fail(&e));
    let client = TmdbClient::from_config(&config).unwrap_or_else(|e| fail(&e));

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stderr = io::stderr();

    tokio::select! {
        res = app::run(&client, &config, &mut stdin, &mut stderr) => match res {
            Ok(document) => {
                if let Err(e) = emit(io::stdout().lock(), &document) {
                    fail(&e);
                }
            }
            Err(e) => fail(&e),
        },
        _ = interrupted() => {
            eprintln!("Exiting...");
            process::exit(EXIT_INTERRUPTED);
        }
    }
}
