use std::path::PathBuf;

use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "aquamon", author, about)]
pub struct Opts {
    /// Show only warnings and errors
    #[structopt(short = "s", long = "silent", conflicts_with = "verbose")]
    pub silent: bool,

    /// Show all log messages
    #[structopt(short = "v", long = "verbose", conflicts_with = "silent")]
    pub verbose: bool,

    /// Suppress timestamps in logs, useful with journald
    #[structopt(long = "suppress-log-timestamps")]
    pub suppress_log_timestamps: bool,

    /// Settings file
    #[structopt(parse(from_os_str), env = "AQUAMON_SETTINGS", default_value = "aquamon.toml")]
    pub settings: PathBuf,

    /// Search sensors by name, location or ID
    #[structopt(short = "q", long = "query")]
    pub query: Option<String>,

    /// Show only sensors with the given status
    #[structopt(long = "status", default_value = "all")]
    pub status: String,

    /// Show only sensors of the given type
    #[structopt(long = "type", default_value = "all")]
    pub type_: String,

    /// Stop after the given number of ticks
    #[structopt(short = "n", long = "ticks")]
    pub ticks: Option<u64>,

    /// Print the seeded sensors as JSON and exit
    #[structopt(long = "export")]
    pub export: bool,
}
