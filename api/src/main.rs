use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use recipe_studio_api::{
    application::{
        http::{
            recipe::router::RECIPE_FLOW_NAME,
            server::http_server::{router, state, with_metrics},
        },
        startup::run_startup_sample,
        telemetry::init_tracing,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_tracing(&args.log)?;

    let state = state(args.clone())?;

    if args.server.skip_startup_sample {
        info!("startup sample generation disabled");
    } else {
        run_startup_sample(&state.service).await?;
    }

    let root_path = args.server.root_path.clone();
    let mut app = router(state)?;
    if args.server.metrics_enabled {
        app = with_metrics(app, &root_path);
    }

    let addr = args.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Starting server on http://{}", addr);
    info!(
        "Flow available at: POST http://{}{}/{}",
        addr, root_path, RECIPE_FLOW_NAME
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
