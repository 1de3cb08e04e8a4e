use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::sheet::SqliteSheet;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let sheet = SqliteSheet::open(&cfg.database)?;
        LogLogic::print_log(sheet.conn())?;
    }

    Ok(())
}
