use clap::{Args, Subcommand};
use gestor_core::{Action, Entity, EntityKind, Orchestrator, OrchestratorError};
use serde_json::Value;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::OutputFormat;

#[derive(Args)]
pub struct EntityCommand {
    #[command(subcommand)]
    pub command: EntitySubcommand,
}

#[derive(Subcommand)]
pub enum EntitySubcommand {
    /// Create an entity from a JSON payload
    Create {
        /// Entity kind (e.g. client, invoice) or module name (e.g. faturas)
        kind: EntityKind,

        /// File holding the JSON payload (default: stdin)
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Replace an existing entity with a JSON payload
    Update {
        /// Entity kind or module name
        kind: EntityKind,

        /// Entity ID
        id: String,

        /// File holding the JSON payload (default: stdin)
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Delete an entity
    Delete {
        /// Entity kind or module name
        kind: EntityKind,

        /// Entity ID
        id: String,

        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Validate a JSON payload without saving it
    Check {
        /// Entity kind or module name
        kind: EntityKind,

        /// File holding the JSON payload (default: stdin)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl EntityCommand {
    pub async fn run(&self, orchestrator: &Orchestrator) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            EntitySubcommand::Create { kind, file } => {
                let payload = parse_payload(*kind, &read_payload(file.as_ref())?)?;
                let result = report(orchestrator.process_operation(Action::Create, payload, None).await)?;
                match &result.id {
                    Some(id) => println!("Created {}: {}", kind, id),
                    None => println!("Created {}", kind),
                }
                Ok(())
            }

            EntitySubcommand::Update { kind, id, file } => {
                let payload = parse_payload(*kind, &read_payload(file.as_ref())?)?;
                report(
                    orchestrator
                        .process_operation(Action::Update, payload, Some(id))
                        .await,
                )?;
                println!("Updated {}: {}", kind, id);
                Ok(())
            }

            EntitySubcommand::Delete { kind, id, force } => {
                // Confirm deletion unless --force is used
                if !force {
                    print!("Delete {} '{}'? [y/N] ", kind, id);
                    io::stdout().flush()?;

                    let mut input = String::new();
                    io::stdin().read_line(&mut input)?;

                    if !input.trim().eq_ignore_ascii_case("y") {
                        println!("Deletion cancelled.");
                        return Ok(());
                    }
                }

                report(
                    orchestrator
                        .process_operation(Action::Delete, Entity::blank(*kind), Some(id))
                        .await,
                )?;
                println!("Deleted {}: {}", kind, id);
                Ok(())
            }

            EntitySubcommand::Check { kind, file, format } => {
                let payload = parse_payload(*kind, &read_payload(file.as_ref())?)?;
                let validation = orchestrator.check(&payload);

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&validation)?);
                        Ok(())
                    }
                    OutputFormat::Text if validation.valid => {
                        println!("{} '{}' is valid", kind, payload.label());
                        Ok(())
                    }
                    OutputFormat::Text => {
                        print_errors(&validation.errors);
                        Err(format!("{} is invalid", kind).into())
                    }
                }
            }
        }
    }
}

/// Prints validation messages before handing the error back.
fn report<T>(
    result: Result<T, OrchestratorError>,
) -> Result<T, Box<dyn std::error::Error>> {
    result.map_err(|e| {
        print_errors(e.validation_errors());
        e.into()
    })
}

fn print_errors(errors: &[String]) {
    for error in errors {
        eprintln!("  - {}", error);
    }
}

fn read_payload(file: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e).into()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parses an application-shape JSON object as an entity of `kind`.
pub fn parse_payload(kind: EntityKind, text: &str) -> Result<Entity, Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| format!("Payload is not valid JSON: {}", e))?;
    if !value.is_object() {
        return Err("Payload must be a JSON object".into());
    }
    Entity::from_json(kind, value)
        .map_err(|e| format!("Payload is not a valid {}: {}", kind, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        let entity = parse_payload(
            EntityKind::Client,
            r#"{"nome": "Kianda Comercial", "nif": "5417000001"}"#,
        )
        .unwrap();
        assert_eq!(entity.kind(), EntityKind::Client);
        assert_eq!(entity.label(), "Kianda Comercial");
    }

    #[test]
    fn test_parse_payload_rejects_non_objects() {
        let err = parse_payload(EntityKind::Client, "[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "Payload must be a JSON object");

        let err = parse_payload(EntityKind::Client, "{nome").unwrap_err();
        assert!(err.to_string().starts_with("Payload is not valid JSON"));
    }

    #[test]
    fn test_parse_payload_type_mismatch() {
        let err = parse_payload(EntityKind::Invoice, r#"{"items": "none"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Payload is not a valid invoice"));
    }
}
