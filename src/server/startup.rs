//! Database connection and HTTP listener startup.

use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Bind the HTTP listener to the configured address
pub async fn bind_listener(config: &Config) -> Result<TcpListener, Error> {
    let listener = TcpListener::bind(config.listen_addr).await?;

    tracing::info!("Listening on {}", config.listen_addr);

    Ok(listener)
}

/// Serve `router` on `listener` until the process is stopped
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), Error> {
    axum::serve(listener, router).await?;

    Ok(())
}
