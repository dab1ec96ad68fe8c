use crate::config::{AssetTypeTable, FileClass};
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 掃描資料夾第一層中指定類別的檔案，依檔名排序（字典序）
///
/// 只看資料夾本身這一層，不往下遞迴
pub fn scan_folder_files(
    directory: &Path,
    table: &AssetTypeTable,
    class: FileClass,
) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| table.classify(entry.path()) == Some(class))
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort_by_key(|path| path.file_name().map(std::ffi::OsStr::to_owned));
    Ok(files)
}
