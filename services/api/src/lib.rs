mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use ospa_scorer::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
