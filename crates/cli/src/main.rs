use clap::Parser;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "beeutil")]
#[command(about = "Manage encrypted Hivemapper plugin credentials", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // A second subscriber (e.g. under a test harness) is not fatal
    if let Err(e) = beeutil_utils::init() {
        eprintln!("beeutil: failed to initialise logging: {e}");
    }

    let cli = Cli::parse();
    cli.command.execute()
}
