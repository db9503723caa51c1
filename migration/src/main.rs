#[async_std::main]
async fn main() {
    dotenvy::dotenv().ok();
    sea_orm_migration::cli::run_cli(migration::Migrator).await;
}
