mod file_scanner;
mod path_validator;

pub use file_scanner::scan_folder_files;
pub use path_validator::validate_directory_exists;
