use crate::config::types::{AssetTypeTable, Config};
use anyhow::{Context, Result};

/// 編譯時嵌入的檔案類型設定（不需要外部檔案）
const ASSET_TYPE_TABLE_JSON: &str = include_str!("../data/asset_type_table.json");

impl Config {
    pub fn new() -> Result<Self> {
        Ok(Self {
            asset_type_table: Self::load_embedded_asset_type_table()?,
        })
    }

    /// 從編譯時嵌入的 JSON 載入檔案類型表
    fn load_embedded_asset_type_table() -> Result<AssetTypeTable> {
        serde_json::from_str(ASSET_TYPE_TABLE_JSON).context("無法解析嵌入的檔案類型設定")
    }
}
