use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lrec", about = "Decode structured log lines into typed records")]
pub struct CliOpt {
    /// Input format name (an alias or a canonical name).
    #[structopt(long = "format", short = "f", default_value = "syslog")]
    pub format: String,

    /// Report dropped lines on stderr.
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}
