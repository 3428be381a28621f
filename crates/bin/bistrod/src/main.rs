//! # bistrod: bistro daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer, no domain logic belongs here.

mod config;

use bistro_adapter_http_axum::state::AppState;
use bistro_adapter_storage_sqlite_sqlx::{
    SqliteBillRepository, SqliteCategoryRepository, SqliteCustomerRepository,
    SqliteDishRepository, SqliteOrderItemRepository,
};
use bistro_app::services::bill_service::BillService;
use bistro_app::services::category_service::CategoryService;
use bistro_app::services::customer_service::CustomerService;
use bistro_app::services::dish_service::DishService;
use bistro_app::services::order_item_service::OrderItemService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    for var in &config.database.ignored_vars {
        tracing::warn!(
            variable = %var,
            "ignoring network database setting, the store is a local SQLite database"
        );
    }

    // Database
    let db = bistro_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();
    tracing::info!(url = config.database_url(), "database ready");

    // Repositories
    let customer_repo = SqliteCustomerRepository::new(pool.clone());
    let category_repo = SqliteCategoryRepository::new(pool.clone());
    let dish_repo = SqliteDishRepository::new(pool.clone());
    let order_item_repo = SqliteOrderItemRepository::new(pool.clone());
    let bill_repo = SqliteBillRepository::new(pool);

    // HTTP
    let state = AppState::new(
        CustomerService::new(customer_repo),
        CategoryService::new(category_repo),
        DishService::new(dish_repo),
        OrderItemService::new(order_item_repo),
        BillService::new(bill_repo),
    );
    let app = bistro_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("bistrod listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("bistrod stopped");
    Ok(())
}

/// Resolve once SIGINT (Ctrl-C) or, on Unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
