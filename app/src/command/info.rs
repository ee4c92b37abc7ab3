use whenwhere_config::Config;
use whenwhere_core::Extractor;

/// Strategy for displaying configuration and the active strategy chain.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    async fn execute(&self, config: Self::Input) -> anyhow::Result<()> {
        println!("=== whenwhere Configuration ===\n");

        match Config::config_path() {
            Ok(path) if path.exists() => println!("Config: {}", path.display()),
            Ok(path) => println!("Config: {} (not found, using defaults)", path.display()),
            Err(e) => println!("Config: unavailable ({e})"),
        }
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);
        if let Ok(filter) = std::env::var("RUST_LOG") {
            println!("  RUST_LOG override: {filter}");
        }
        println!();

        println!("Output:");
        println!("  Pretty: {}", config.output.pretty);
        println!();

        println!("Parsing Strategies:");
        for (idx, name) in Extractor::with_defaults()
            .strategy_names()
            .iter()
            .enumerate()
        {
            println!("  {}. {name}", idx + 1);
        }

        Ok(())
    }
}
