//! 目標檔名計算模組
//!
//! 純粹的名稱對應計算，不接觸檔案系統

use std::ffi::OsString;

/// 產生圖片目標檔名，index 為排序後的 1-based 順位
///
/// `folder_number` 直接嵌入檔名，保留前導零
#[must_use]
pub fn image_target_name(folder_number: &str, index: usize) -> String {
    format!("figure_{folder_number}_img_{index}.webp")
}

/// 產生影片目標檔名，每個資料夾最多一個影片
#[must_use]
pub fn video_target_name(folder_number: &str) -> String {
    format!("figure_{folder_number}_video.mp4")
}

/// 單一檔案的重新命名計畫
///
/// 來源檔名維持 OS 原生字串，非 UTF-8 的檔名也能對應到實際路徑；
/// 目標檔名由我們產生，必定是 ASCII
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub current_name: OsString,
    pub target_name: String,
}

/// 依排序後的檔名清單建立圖片重新命名計畫
///
/// 輸入必須已依檔名排序，順位依排序結果由 1 起算
#[must_use]
pub fn plan_image_renames(sorted_names: &[OsString], folder_number: &str) -> Vec<PlannedRename> {
    sorted_names
        .iter()
        .enumerate()
        .map(|(i, name)| PlannedRename {
            current_name: name.clone(),
            target_name: image_target_name(folder_number, i + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_target_name() {
        assert_eq!(image_target_name("3", 1), "figure_3_img_1.webp");
        assert_eq!(image_target_name("12", 7), "figure_12_img_7.webp");
    }

    #[test]
    fn test_image_target_name_keeps_leading_zeros() {
        assert_eq!(image_target_name("007", 2), "figure_007_img_2.webp");
    }

    #[test]
    fn test_video_target_name() {
        assert_eq!(video_target_name("3"), "figure_3_video.mp4");
        assert_eq!(video_target_name("007"), "figure_007_video.mp4");
    }

    #[test]
    fn test_plan_assigns_indices_in_sorted_order() {
        let names = vec![OsString::from("a.webp"), OsString::from("b.webp")];
        let plan = plan_image_renames(&names, "3");

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].current_name, "a.webp");
        assert_eq!(plan[0].target_name, "figure_3_img_1.webp");
        assert_eq!(plan[1].current_name, "b.webp");
        assert_eq!(plan[1].target_name, "figure_3_img_2.webp");
    }

    #[test]
    fn test_plan_empty_input() {
        let plan = plan_image_renames(&[], "3");
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_already_correct_name_maps_to_itself() {
        let names = vec![OsString::from("figure_5_img_1.webp")];
        let plan = plan_image_renames(&names, "5");

        assert_eq!(
            plan[0].current_name.to_str(),
            Some(plan[0].target_name.as_str())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_plan_keeps_non_utf8_names_intact() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"\xFF photo.webp".to_vec());
        let plan = plan_image_renames(&[raw.clone()], "9");

        assert_eq!(plan[0].current_name, raw);
        assert_eq!(plan[0].target_name, "figure_9_img_1.webp");
    }
}
