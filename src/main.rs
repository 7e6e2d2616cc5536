use clap::Parser;
use prism_log::{LoggerConfig, Severity, debug, error, fatal, info, trace, warning};

/// Demo: one line per severity, mirroring the classic sample program.
#[derive(Parser, Debug)]
#[command(author, version, about = "prism-log demo", long_about = None)]
struct Args {
    /// Minimum severity to emit
    #[arg(long, default_value = "trace")]
    threshold: Severity,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    prism_log::init(LoggerConfig {
        threshold: args.threshold,
        color: !args.no_color,
    })?;

    let x = 4;
    trace!("Value of x: {}", x);
    debug!("Value of x: {}", x);
    info!("Value of x: {}", x);
    warning!("Value of x: {}", x);
    error!("Value of x: {}", x);
    fatal!("Value of x: {}", x);
    Ok(())
}
