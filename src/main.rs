use anyhow::{Context, Result};
use console::style;
use figure_renamer::component::FigureRenamer;
use figure_renamer::config::Config;
use figure_renamer::init;
use log::{info, warn};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    init::init();

    let base_dir = resolve_base_dir()?;
    let config = Config::new()?;
    let renamer = FigureRenamer::new(config);

    match renamer.run(&base_dir) {
        Ok(_stats) => {
            info!("程式正常結束");
            Ok(())
        }
        Err(e) => {
            warn!("程式錯誤: {e}");
            eprintln!("{} {}", style("錯誤:").red().bold(), e);
            Err(e)
        }
    }
}

/// 基底目錄取自執行檔所在目錄，取不到時退回目前工作目錄
fn resolve_base_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("無法取得執行檔路徑")?;
    match exe.parent() {
        Some(parent) => Ok(parent.to_path_buf()),
        None => env::current_dir().context("無法取得目前工作目錄"),
    }
}
