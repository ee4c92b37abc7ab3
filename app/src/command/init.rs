use whenwhere_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/whenwhere/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::create_config()?;

        println!("✅ Created config file at: {}", path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - logging.level: default log filter (RUST_LOG takes precedence)");
        println!("   - output.pretty: pretty-print JSON from 'whenwhere parse'");
        Ok(())
    }
}
