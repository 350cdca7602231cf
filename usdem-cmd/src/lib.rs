//! Command implementations for the USDEM CLI.
//!
//! Provides subcommands for listing the states in a data file, printing the
//! chart specs the dashboard would render for a state, and checking the
//! data's arithmetic consistency.

use clap::Subcommand;
use usdem_view::Variant;

pub mod check;
pub mod source;
pub mod states;
pub mod views;

#[derive(Subcommand)]
pub enum Command {
    /// List state names in dataset order
    States {
        /// Path to the data file (.json or .csv)
        #[arg(short = 'd', long)]
        data: String,
    },

    /// Print the chart specs for one state as JSON
    Views {
        /// Path to the data file (.json or .csv)
        #[arg(short = 'd', long)]
        data: String,

        /// State to compute views for (defaults to the first record)
        #[arg(short = 's', long)]
        state: Option<String>,

        /// Dashboard variant: plain or dark
        #[arg(long, default_value_t = Variant::Plain)]
        variant: Variant,
    },

    /// Report records that break the data's arithmetic invariants
    Check {
        /// Path to the data file (.json or .csv)
        #[arg(short = 'd', long)]
        data: String,

        /// Allowed distance of the race percentage sum from 100
        #[arg(long, default_value_t = usdem_db::DEFAULT_PERCENT_TOLERANCE)]
        tolerance: f64,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::States { data } => {
            let dataset = source::load_dataset(&data)?;
            print!("{}", states::render_states(&dataset)?);
            Ok(())
        }
        Command::Views {
            data,
            state,
            variant,
        } => {
            let dataset = source::load_dataset(&data)?;
            println!("{}", views::render_views(&dataset, state.as_deref(), variant)?);
            Ok(())
        }
        Command::Check { data, tolerance } => {
            let dataset = source::load_dataset(&data)?;
            check::run_check(&dataset, tolerance)
        }
    }
}
