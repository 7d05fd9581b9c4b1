mod config_cmd;
mod entity;
mod sync_cmd;

use clap::ValueEnum;

pub use config_cmd::ConfigCommand;
pub use entity::EntityCommand;
pub use sync_cmd::SyncCommand;

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
