mod cli;
mod infra;
mod routes;
mod server;
mod wizard;

use carbon_footprint::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
