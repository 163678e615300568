pub mod args;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, Cli, Commands, LocateArgs, LookupArgs, RenderArgs,
};
pub use runner::run;
