use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        init,
    } = cmd
    {
        let path = Config::config_file();

        // ---- INIT CONFIG ----
        if *init {
            if Config::init_file()? {
                success(format!("Config file created: {}", path.display()));
            } else {
                info(format!("Config file already exists: {}", path.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", yaml);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            Config::init_file()?;
            let used = ConfigLogic::edit(&path, editor)?;
            success(format!(
                "Configuration file edited successfully using '{}'",
                used
            ));
        }
    }

    Ok(())
}
