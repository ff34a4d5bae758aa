use std::{io, sync::OnceLock};

use application::{shell::Reply, Args, Config, Context, Service, Shell};
use service::infra::{backend::Unconnected, InMemory};
use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        pricing,
        catalog,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let database = match &catalog.path {
        Some(path) => InMemory::load(path).map_err(|e| {
            log::error!("failed to load catalog `{}`: {e}", path.display());
        })?,
        None => InMemory::builtin().map_err(|e| {
            log::error!("failed to load built-in catalog: {e}");
        })?,
    };
    log::info!(
        listings = database.listings().len(),
        transactions = database.transactions().len(),
        "catalog loaded",
    );

    let service = Service::new(pricing.into(), database, Unconnected);
    let mut shell = Shell::new(Context::new(service));

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let home = shell.render().await.map_err(|e| log::error!("{e}"))?;
    print(&mut stdout, &format!("{home}\n\nType `help` to list commands.\n"))
        .await?;
    loop {
        print(&mut stdout, "> ").await?;
        let Some(line) = lines.next_line().await.map_err(|e| {
            log::error!("failed to read input: {e}");
        })?
        else {
            break;
        };

        match shell.handle(&line).await {
            None => {}
            Some(Reply::Print(text)) => {
                print(&mut stdout, &format!("{text}\n")).await?;
            }
            Some(Reply::Quit) => break,
        }
    }

    Ok(())
}

/// Prints the provided `text` to the `out`put without a trailing newline.
async fn print(out: &mut tokio::io::Stdout, text: &str) -> Result<(), ()> {
    out.write_all(text.as_bytes()).await.map_err(|e| {
        log::error!("failed to write output: {e}");
    })?;
    out.flush().await.map_err(|e| {
        log::error!("failed to flush output: {e}");
    })
}
