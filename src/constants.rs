//! Constants used throughout letterpress

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] =
    &["letterpress.json", "letterpress.yaml", "letterpress.yml"];

/// Default template resource suffix
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".template";

/// Default directory holding template resources, relative to the config directory
pub const DEFAULT_RESOURCE_ROOT: &str = "templates";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Placeholder syntax defaults
pub mod placeholder {
    pub const OPENING: char = '{';
    pub const CLOSING: char = '}';
    pub const FORMAT_SEPARATOR: char = ':';
    pub const PATH_SEPARATOR: char = '.';
}

/// MiniJinja render context
pub mod engine {
    /// Name under which compiled template text is registered in the environment.
    pub const TEMPLATE_NAME: &str = "message";

    /// Text every missing property marker starts with.
    pub const MISSING_PROPERTY_MARKER: &str = "Missing property";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
