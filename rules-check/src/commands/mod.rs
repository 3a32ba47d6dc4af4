pub mod check;
pub(crate) mod files;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "udev-rules-check";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Commands
pub const CHECK: &str = "check";
// Arguments for check
pub const RULES_FILES: &str = "rules-files";
// Reads the rules from standard input when given as a file name
pub const STDIN_PATH: &str = "-";
pub const STDIN_NAME: &str = "<stdin>";
// Environment variable holding the log level
pub const LOG_LEVEL_ENV: &str = "UDEV_RULES_CHECK_LOG";

pub(crate) const RULE_FILE_SUPPORTED_EXTENSIONS: [&str; 1] = [".rules"];

pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const FAILURE_STATUS_CODE: i32 = 1;
pub const ERROR_STATUS_CODE: i32 = 1;
