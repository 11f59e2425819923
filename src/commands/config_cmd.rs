//! Configuration commands.

use clap::{Args, Subcommand};

use agenda_pro::Config;

use super::OutputFormat;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                // never echo the shared secret
                let mut masked = config.clone();
                if !masked.password.is_empty() {
                    masked.password = "********".to_string();
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&masked)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");
                        println!("Config file: {}", Config::default_config_path().display());
                        println!("password: {}", if masked.password.is_empty() {
                            "(not set)"
                        } else {
                            "********"
                        });
                        println!("store.base_url: {}", masked.store.base_url);
                        println!(
                            "store.api_key: {}",
                            masked.store.api_key.as_deref().unwrap_or("(not set)")
                        );
                        println!("store.timeout_secs: {}", masked.store.timeout_secs);
                    }
                }
                Ok(())
            }
        }
    }
}
