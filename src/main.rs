use clap::Parser;
use dotenv::dotenv;
use lightprobe::config::{
    AuditConfig, DEFAULT_CATEGORIES, DEFAULT_INTERVAL_MS, DEFAULT_OUTPUT_PATH, DEFAULT_PROGRAM,
    DEFAULT_TARGET_URL, DEFAULT_TIMEOUT_SECS,
};
use lightprobe::services::{describe_failure, run};
use lightprobe::utils::init_logging;
use std::path::PathBuf;
use std::time::Duration;

/// lightprobe — wait for a local server, then audit it with Lighthouse.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lightprobe",
    version,
    about = "Wait for a local web server to come up, then audit it with Lighthouse.",
    long_about = None
)]
struct Cli {
    /// URL to wait for and audit.
    #[arg(long, env = "LIGHTPROBE_URL", default_value = DEFAULT_TARGET_URL)]
    url: String,

    /// Seconds to keep polling before giving up on the server.
    #[arg(long = "timeout-secs", env = "LIGHTPROBE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Pause between reachability attempts, in milliseconds.
    #[arg(long = "interval-ms", env = "LIGHTPROBE_INTERVAL_MS", default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Where Lighthouse writes its JSON report.
    #[arg(long, env = "LIGHTPROBE_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Program that runs Lighthouse.
    #[arg(long, env = "LIGHTPROBE_PROGRAM", default_value = DEFAULT_PROGRAM)]
    program: String,

    /// Arguments given to the program before the URL (comma separated).
    #[arg(
        long = "program-args",
        env = "LIGHTPROBE_PROGRAM_ARGS",
        value_delimiter = ',',
        default_value = "lighthouse"
    )]
    program_args: Vec<String>,

    /// Lighthouse categories to run (comma separated).
    #[arg(long, env = "LIGHTPROBE_CATEGORIES", value_delimiter = ',', default_values = DEFAULT_CATEGORIES)]
    categories: Vec<String>,
}

impl Cli {
    fn into_config(self) -> AuditConfig {
        AuditConfig {
            target_url: self.url,
            timeout: Duration::from_secs(self.timeout_secs),
            retry_interval: Duration::from_millis(self.interval_ms),
            output_path: self.output,
            program: self.program,
            program_args: self
                .program_args
                .into_iter()
                .filter(|a| !a.is_empty())
                .collect(),
            categories: self.categories,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    // Bad flag values exit 1 like any other configuration error; help and
    // version output still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };
    init_logging()?;

    let config = cli.into_config();
    if let Err(e) = run(&config).await {
        println!("{}", describe_failure(&e));
        std::process::exit(1);
    }
    Ok(())
}
