//! 圖片與影片批次重新命名主模組
//!
//! 協調資料夾掃描、檔名計算與實際重新命名的整體流程

use super::folder_scanner::{NumberedFolder, discover_numbered_folders};
use super::rename_plan::{PlannedRename, plan_image_renames, video_target_name};
use crate::config::{Config, FileClass};
use crate::tools::{scan_folder_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use log::{info, warn};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// 圖片與影片重新命名器
pub struct FigureRenamer {
    config: Config,
}

/// 單一檔案的處理結果
#[derive(Debug)]
enum RenameOutcome {
    Renamed,
    AlreadyCorrect,
    CollisionSkipped,
    Failed,
}

/// 重新命名結果統計
#[derive(Debug, Default)]
pub struct RenameStats {
    pub renamed: usize,
    pub already_correct: usize,
    pub collisions: usize,
    pub failed: usize,
    /// 沒有任何影片檔案的資料夾數
    pub missing_videos: usize,
}

impl FigureRenamer {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// 對基底目錄下所有數字資料夾執行重新命名
    ///
    /// 基底目錄無法讀取時直接失敗；個別資料夾或檔案的問題
    /// 只記錄並跳過，不中斷整體流程
    pub fn run(&self, base_dir: &Path) -> Result<RenameStats> {
        println!("{}", style("=== 批次重新命名圖片與影片 ===").cyan().bold());
        println!("工作目錄: {}", base_dir.display());

        validate_directory_exists(base_dir)?;

        let folders = discover_numbered_folders(base_dir)?;
        println!(
            "{}",
            style(format!("找到 {} 個資料夾", folders.len())).green()
        );

        let mut stats = RenameStats::default();
        for folder in &folders {
            self.process_folder(folder, &mut stats);
        }

        self.display_summary(&stats);
        Ok(stats)
    }

    fn process_folder(&self, folder: &NumberedFolder, stats: &mut RenameStats) {
        // 資料夾可能在掃描之後被移除
        if !folder.path.is_dir() {
            println!(
                "{}",
                style(format!("跳過: {} 不存在或不是資料夾", folder.path.display())).yellow()
            );
            warn!("資料夾已消失，跳過: {}", folder.path.display());
            return;
        }

        println!();
        println!("處理資料夾: {}", style(&folder.number).cyan());

        if let Err(e) = self.rename_images(folder, stats) {
            println!("  {} {}", style("錯誤:").red(), e);
            warn!("處理圖片失敗: {e}");
        }

        if let Err(e) = self.rename_video(folder, stats) {
            println!("  {} {}", style("錯誤:").red(), e);
            warn!("處理影片失敗: {e}");
        }
    }

    /// 將資料夾內的圖片依檔名排序後重新命名為 `figure_{N}_img_{i}.webp`
    pub fn rename_images(&self, folder: &NumberedFolder, stats: &mut RenameStats) -> Result<()> {
        let image_files =
            scan_folder_files(&folder.path, &self.config.asset_type_table, FileClass::Image)?;
        println!("  找到 {} 個圖片檔案", image_files.len());

        let names: Vec<OsString> = image_files
            .iter()
            .filter_map(|path| path.file_name())
            .map(OsStr::to_owned)
            .collect();

        let plan = plan_image_renames(&names, &folder.number);
        Self::apply_image_plan(&folder.path, &plan, stats);

        Ok(())
    }

    /// 將資料夾內的影片重新命名為 `figure_{N}_video.mp4`
    ///
    /// 多個影片時只處理字典序最前的一個，其餘保持原樣
    pub fn rename_video(&self, folder: &NumberedFolder, stats: &mut RenameStats) -> Result<()> {
        let video_files =
            scan_folder_files(&folder.path, &self.config.asset_type_table, FileClass::Video)?;
        println!("  找到 {} 個影片檔案", video_files.len());

        let Some(video_file) = video_files.first() else {
            println!("  {} 未找到影片檔案", style("警告:").yellow());
            stats.missing_videos += 1;
            return Ok(());
        };

        let current_name = video_file
            .file_name()
            .map(OsStr::to_owned)
            .unwrap_or_default();
        let target_name = video_target_name(&folder.number);

        let outcome = Self::apply_rename(&folder.path, &current_name, &target_name);
        Self::record(&outcome, stats);

        Ok(())
    }

    /// 依序套用重新命名計畫，單一檔案失敗不影響其餘檔案
    fn apply_image_plan(folder_path: &Path, plan: &[PlannedRename], stats: &mut RenameStats) {
        for planned in plan {
            let outcome =
                Self::apply_rename(folder_path, &planned.current_name, &planned.target_name);
            Self::record(&outcome, stats);
        }
    }

    /// 套用單一檔案的重新命名
    ///
    /// 來源檔名維持 OS 原生字串，只在顯示時轉為 lossy 文字
    fn apply_rename(folder_path: &Path, current_name: &OsStr, target_name: &str) -> RenameOutcome {
        if current_name == OsStr::new(target_name) {
            println!(
                "  {} {} 已經是正確名稱",
                style("-").dim(),
                current_name.to_string_lossy()
            );
            return RenameOutcome::AlreadyCorrect;
        }

        let source = folder_path.join(current_name);
        let target = folder_path.join(target_name);

        // 目標名稱已被其他檔案佔用時跳過，絕不覆蓋既有檔案
        if target.exists() {
            println!(
                "  {} {} 已存在，跳過重新命名 {}",
                style("警告:").yellow(),
                target_name,
                current_name.to_string_lossy()
            );
            warn!("命名衝突: {} -> {}", source.display(), target.display());
            return RenameOutcome::CollisionSkipped;
        }

        match fs::rename(&source, &target) {
            Ok(()) => {
                println!(
                    "  {} {} -> {}",
                    style("✓").green(),
                    current_name.to_string_lossy(),
                    target_name
                );
                RenameOutcome::Renamed
            }
            Err(e) => {
                println!(
                    "  {} 無法重新命名 {}: {}",
                    style("錯誤:").red(),
                    current_name.to_string_lossy(),
                    e
                );
                warn!(
                    "重新命名失敗: {} -> {}: {e}",
                    source.display(),
                    target.display()
                );
                RenameOutcome::Failed
            }
        }
    }

    fn record(outcome: &RenameOutcome, stats: &mut RenameStats) {
        match outcome {
            RenameOutcome::Renamed => stats.renamed += 1,
            RenameOutcome::AlreadyCorrect => stats.already_correct += 1,
            RenameOutcome::CollisionSkipped => stats.collisions += 1,
            RenameOutcome::Failed => stats.failed += 1,
        }
    }

    fn display_summary(&self, stats: &RenameStats) {
        println!();
        println!("{}", "=".repeat(50));
        println!("{}", style("批次重新命名完成！").green().bold());
        println!("  成功: {} 個", style(stats.renamed).green());
        println!("  已是正確名稱: {} 個", stats.already_correct);
        if stats.collisions > 0 {
            println!("  衝突跳過: {} 個", style(stats.collisions).yellow());
        }
        if stats.failed > 0 {
            println!("  失敗: {} 個", style(stats.failed).red());
        }
        if stats.missing_videos > 0 {
            println!(
                "  缺少影片: {} 個資料夾",
                style(stats.missing_videos).yellow()
            );
        }

        info!(
            "重新命名完成 - 成功: {}, 已正確: {}, 衝突: {}, 失敗: {}",
            stats.renamed, stats.already_correct, stats.collisions, stats.failed
        );
    }
}
