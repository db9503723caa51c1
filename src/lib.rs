mod error;
mod handlers;

pub use error::ApiError;

use std::env;

use anyhow::Context;
use axum::{routing::get, Router};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
}

/// The cupcakes router over a ready database connection.
pub fn app(conn: DatabaseConnection) -> Router {
    Router::new()
        .route(
            "/cupcakes",
            get(handlers::list_cupcakes).post(handlers::create_cupcake),
        )
        .route(
            "/cupcakes/{id}",
            get(handlers::show_cupcake)
                .put(handlers::update_cupcake)
                .delete(handlers::delete_cupcake),
        )
        .with_state(AppState { conn })
}

pub async fn start() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set in .env file")?;
    let host = env::var("HOST").context("HOST is not set in .env file")?;
    let port = env::var("PORT").context("PORT is not set in .env file")?;
    let server_url = format!("{host}:{port}");

    let conn = Database::connect(&db_url)
        .await
        .context("Database connection failed")?;
    Migrator::up(&conn, None).await?;

    tracing::info!("listening on {server_url}");
    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app(conn)).await?;

    Ok(())
}
