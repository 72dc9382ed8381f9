//! quotd server
//!
//! Main entry point for the quote server

use quotd::ServerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	ServerBuilder::new().start_server().await
}
