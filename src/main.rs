use inventory_db_rust::config::AppConfig;
use inventory_db_rust::{load_seed_data, serve, FileGateway, InventorySession};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info) // Default to Info for everything
        .parse_default_env()
        .init();

    println!("Inventory: record store server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let gateway = FileGateway::from_config(&config.storage);
    println!(
        "Opening inventory at {} (taxonomy {})",
        gateway.records_path().display(),
        gateway.taxonomy_path().display()
    );
    let mut session = InventorySession::open(gateway)?;

    // Load seed data for demonstration (optional)
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        println!("Loading seed data...");
        if load_seed_data(&mut session)? {
            println!("Seed data loaded successfully");
        }
    }

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Inventory server running on http://{}", bind_address);

    serve(listener, session).await
}
