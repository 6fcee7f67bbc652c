use std::future::Future;
use std::pin::Pin;

use anyhow::{Context, Result};
use chat::{build_responder, store};
use log::info;
use tokio::signal;
use utils::{print_err, unwrap_or_def_verbose};

mod api;
mod chat;
mod logging;
mod utils;

type SignalFuture = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

async fn terminate_on_signal() -> Result<()> {
    let interrupt_signal: SignalFuture = Box::pin(async {
        signal::unix::signal(signal::unix::SignalKind::interrupt())
            .context("Failed to register interrupt signal handler!")?
            .recv()
            .await;
        Ok(())
    });
    let terminate_signal: SignalFuture = Box::pin(async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to register terminate signal handler!")?
            .recv()
            .await;
        Ok(())
    });
    futures_util::future::select_all([interrupt_signal, terminate_signal])
        .await
        .0
}

#[tokio::main]
async fn main() -> Result<()> {
    let _logger = logging::init();
    let config = unwrap_or_def_verbose(store::load_config());
    let tables = store::load_responses()?;
    let responder = build_responder(&config, tables)
        .context("Response table is invalid, refusing to start")
        .inspect_err(print_err)?;

    info!("Running");
    let shutdown = async {
        let _ = terminate_on_signal().await.inspect_err(print_err);
        info!("Terminating.");
    };
    api::serve(config, responder, shutdown)
        .await
        .inspect_err(print_err)?;
    info!("Terminated.");
    Ok(())
}
