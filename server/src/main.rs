#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    credschema_server::router::server_main().await
}
