pub mod load;
pub mod types;

pub use types::{AssetTypeTable, Config, FileClass};
