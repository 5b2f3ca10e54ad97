#[tokio::main]
async fn main() -> std::io::Result<()> {
    invite_server::run_with_config().await
}
