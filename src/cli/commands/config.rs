use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "No configuration file found at {} (run `equiptrack init` first)",
                    path.display()
                )));
            }
            info(format!("Configuration file: {}", path.display()));
            println!("{}", fs::read_to_string(&path)?);
        } else {
            info("Nothing to do. Try `equiptrack config --print`.");
        }
    }
    Ok(())
}
