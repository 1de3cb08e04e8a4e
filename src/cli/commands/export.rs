use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        user,
        force,
    } = cmd
    {
        let ledger = open_ledger(cfg)?;
        let snapshot = ledger.load()?;

        let n = ExportLogic::export(&snapshot, *format, file, user.as_deref(), *force)?;
        if n > 0 {
            info(format!("{} row(s) written as {}.", n, format.as_str()));
        }
    }
    Ok(())
}
