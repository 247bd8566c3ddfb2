mod cli;
mod infra;
mod routes;
mod score;
mod server;

use loan_risk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
