#[tokio::main]
async fn main() -> anyhow::Result<()> {
    game_store_server::run().await
}
