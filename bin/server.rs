// NZ validators - HTTP server
// Serves /api/ValidateNZBankAccount and /api/ValidateNZIRDNumber

use nz_validators::{router, ServerConfig};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    println!("NZ validators listening on http://{}", config.bind_address);
    println!("   API: /api/ValidateNZBankAccount?accountNumber=01-0902-0068389-00");
    println!("   API: /api/ValidateNZIRDNumber?irdNumber=49091850");

    axum::serve(listener, router()).await?;
    Ok(())
}
