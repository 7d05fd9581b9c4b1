//! Loads whole modules from the backend.

use clap::Args;
use gestor_core::{Entity, EntityKind, Orchestrator};
use serde_json::{Map, Value};

use super::OutputFormat;

/// Synchronize one or more modules from the backend
#[derive(Args)]
pub struct SyncCommand {
    /// Modules to load (e.g. clientes faturas); kind names are accepted too
    #[arg(required_unless_present = "all")]
    modules: Vec<EntityKind>,

    /// Load every module
    #[arg(long, conflicts_with = "modules")]
    all: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl SyncCommand {
    pub async fn run(&self, orchestrator: &Orchestrator) -> Result<(), Box<dyn std::error::Error>> {
        let kinds: Vec<EntityKind> = if self.all {
            EntityKind::ALL.to_vec()
        } else {
            self.modules.clone()
        };

        let modules = orchestrator.synchronize_modules(&kinds).await?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&to_json(&kinds, &modules)?)?);
            }
            OutputFormat::Text => {
                for (kind, entities) in kinds.iter().zip(&modules) {
                    print_module(*kind, entities);
                }
            }
        }
        Ok(())
    }
}

/// Single module → its array; several → an object keyed by module name.
fn to_json(kinds: &[EntityKind], modules: &[Vec<Entity>]) -> Result<Value, serde_json::Error> {
    if let [only] = modules {
        return serde_json::to_value(only);
    }
    let mut map = Map::new();
    for (kind, entities) in kinds.iter().zip(modules) {
        map.insert(kind.module().to_string(), serde_json::to_value(entities)?);
    }
    Ok(Value::Object(map))
}

fn print_module(kind: EntityKind, entities: &[Entity]) {
    println!("{} ({})", kind.module(), entities.len());
    if entities.is_empty() {
        println!("  No records found");
    }
    for entity in entities {
        let label = entity.label();
        let label = if label.chars().count() > 40 {
            format!("{}...", label.chars().take(37).collect::<String>())
        } else {
            label
        };
        println!("  {:<36}  {}", entity.id().unwrap_or("-"), label);
    }
    println!();
}
