#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cupcakes_api::start().await
}
