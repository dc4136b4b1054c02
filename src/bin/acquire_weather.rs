use load_weather::{acquire, AcquisitionConfig, LoadWeatherError};

#[tokio::main]
async fn main() -> Result<(), LoadWeatherError> {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AcquisitionConfig::default();
    println!(
        "Fetching hourly weather for {} cities, {} to {}",
        config.cities.len(),
        config.start_date,
        config.end_date
    );

    let written = acquire(&config).await?;
    for path in written {
        println!("Saved {}", path.display());
    }
    Ok(())
}
