//! 數字資料夾掃描模組
//!
//! 找出基底目錄下以純數字命名的資料夾，依數值排序

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 數字命名的資料夾
#[derive(Debug, Clone)]
pub struct NumberedFolder {
    pub path: PathBuf,
    /// 資料夾名稱的數字字串，直接用於新檔名（保留前導零）
    pub number: String,
}

fn is_all_digits(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_digit())
}

/// 掃描基底目錄第一層的數字命名資料夾，依數值由小到大排序
///
/// 基底目錄無法列出時回傳錯誤；非數字命名的項目與一般檔案會被忽略
pub fn discover_numbered_folders(base_dir: &Path) -> Result<Vec<NumberedFolder>> {
    let entries = fs::read_dir(base_dir)
        .with_context(|| format!("無法讀取基底目錄: {}", base_dir.display()))?;

    let mut folders: Vec<NumberedFolder> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            is_all_digits(&name).then(|| NumberedFolder {
                path: entry.path(),
                number: name,
            })
        })
        .collect();

    // "2" 排在 "10" 前面；數值相同（前導零）時以名稱字串決定順序
    folders.sort_by(|a, b| {
        let key_a = a.number.parse::<u64>().unwrap_or(u64::MAX);
        let key_b = b.number.parse::<u64>().unwrap_or(u64::MAX);
        key_a.cmp(&key_b).then_with(|| a.number.cmp(&b.number))
    });

    Ok(folders)
}
