use load_weather::{run_pipeline, LoadWeatherError, PipelineConfig};

fn main() -> Result<(), LoadWeatherError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::default();
    let table = run_pipeline(&config)?;

    println!("Shape: {:?}", table.shape());
    println!("{}", table.tail(Some(5)));
    println!("Saved to {}", config.output_path.display());
    Ok(())
}
