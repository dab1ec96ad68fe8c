use serde::{Deserialize, Serialize};
use std::path::Path;

/// 檔案類別標記，掃描時依副檔名決定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileClass {
    Image,
    Video,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetTypeTable {
    #[serde(rename = "IMAGE_FILE")]
    pub image_file: Vec<String>,
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl AssetTypeTable {
    fn matches(extensions: &[String], path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let dotted = format!(".{ext}");
                extensions.iter().any(|e| e.eq_ignore_ascii_case(&dotted))
            })
    }

    #[must_use]
    pub fn is_image_file(&self, path: &Path) -> bool {
        Self::matches(&self.image_file, path)
    }

    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        Self::matches(&self.video_file, path)
    }

    /// 依副檔名判斷檔案類別，不在表中的檔案回傳 None
    #[must_use]
    pub fn classify(&self, path: &Path) -> Option<FileClass> {
        if self.is_image_file(path) {
            Some(FileClass::Image)
        } else if self.is_video_file(path) {
            Some(FileClass::Video)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub asset_type_table: AssetTypeTable,
}
