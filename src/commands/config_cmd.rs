use clap::{Args, Subcommand};
use std::fs;
use std::io::Write;

use super::OutputFormat;
use crate::config::{Config, ConfigValue};

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

    /// Initialize configuration file
    Init,
}

const DEFAULT_CONFIG: &str = r#"# gestor configuration

# Path to SQLite database (default: platform data dir, e.g. ~/.local/share/gestor/gestor.db)
# database_path: gestor.db

# Session scope stamped onto documents
# company_id: ""
# operator_id: ""
# work_location_id: ""
# cash_register_id: ""

# Storage backend: sqlite or http
backend: sqlite

# http:
#   base_url: "https://api.example.ao/v1"
#   api_key: "your-api-key"
#   timeout_secs: 30

# Append-only audit log (JSON lines)
# audit_log: audit.jsonl
"#;

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            );
                        }
                        println!();

                        println!("database_path: {}", config.database_path.value.display());
                        println!("  source: {}", config.database_path.source);
                        println!();
                        println!("backend: {}", config.backend.value);
                        println!("  source: {}", config.backend.source);
                        println!();
                        print_optional("company_id", &config.company_id);
                        print_optional("operator_id", &config.operator_id);
                        print_optional("work_location_id", &config.work_location_id);
                        print_optional("cash_register_id", &config.cash_register_id);

                        let audit_log = config
                            .audit_log
                            .value
                            .as_ref()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| "(log output)".to_string());
                        println!("audit_log: {}", audit_log);
                        println!("  source: {}", config.audit_log.source);
                        println!();

                        println!(
                            "http.base_url: {}",
                            config.http.base_url.as_deref().unwrap_or("(not set)")
                        );
                        println!(
                            "http.api_key: {}",
                            if config.http.api_key.is_some() { "(set)" } else { "(not set)" }
                        );
                        println!("http.timeout_secs: {}", config.http.timeout_secs());
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let config_path = Config::default_config_path();

                // Check if config already exists
                if config_path.exists() {
                    println!("Config file already exists: {}", config_path.display());
                    println!("Use 'gestor config show' to view current configuration.");
                    return Ok(());
                }

                if let Some(parent) = config_path.parent() {
                    fs::create_dir_all(parent)?;
                }

                let mut file = fs::File::create(&config_path)?;
                file.write_all(DEFAULT_CONFIG.as_bytes())?;

                println!("Created config file: {}", config_path.display());
                println!("\nEdit this file to customize your settings.");
                Ok(())
            }
        }
    }
}

fn print_optional(name: &str, value: &ConfigValue<Option<String>>) {
    println!("{}: {}", name, value.value.as_deref().unwrap_or("(not set)"));
    println!("  source: {}", value.source);
    println!();
}
