//! scanboard - security findings dashboard CLI

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    scanboard_cli::run().await
}
