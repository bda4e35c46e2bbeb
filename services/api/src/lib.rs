mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use retailer_onboard::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
