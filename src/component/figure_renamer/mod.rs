//! 圖片與影片批次重新命名元件
//!
//! 掃描數字命名的資料夾，將圖片重新命名為 `figure_{N}_img_{i}.webp`、
//! 影片重新命名為 `figure_{N}_video.mp4`

mod folder_scanner;
mod main;
mod rename_plan;

pub use folder_scanner::{NumberedFolder, discover_numbered_folders};
pub use main::{FigureRenamer, RenameStats};
