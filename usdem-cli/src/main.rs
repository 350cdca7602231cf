//! USDEM CLI - Command line tool for inspecting state demographics data files.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "usdem-cli",
    version,
    about = "US state demographics data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: usdem_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    usdem_cmd::run(cli.command)
}
