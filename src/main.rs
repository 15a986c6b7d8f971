use product_describer::{logger, server, AwsClients, ProductGenerator, ServiceConfig};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logger is not installed yet, so remember the outcome and report it after init.
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(logger::LoggerConfig::from_env())?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = ServiceConfig::from_env();
    logger::log_startup_info(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.port(),
    );
    logger::log_config_info(&config);

    if config.image_bucket.is_none() {
        log::error!("❌ IMAGE_BUCKET is not set, every generation request will fail");
    }
    if !config.aws.has_static_credentials() {
        log::warn!("⚠️  No AWS credentials in environment variables, using the default credential chain");
    }

    log::info!("🔄 Creating AWS clients...");
    let clients = AwsClients::new(&config.aws).await;
    log::info!("✅ AWS clients initialized");

    let generator = ProductGenerator::from_clients(config, &clients);
    server::run(generator).await?;

    Ok(())
}
