use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "temps-dashboard")]
#[command(about = "Interactive dashboard for daily city temperatures")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Configuration file [default: dashboard.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard, re-rendering after every command read from stdin
    Interactive {
        #[arg(short, long, help = "Input CSV file with daily temperatures")]
        data: Option<PathBuf>,

        #[arg(short = 'o', long, help = "Output SVG chart path")]
        chart_output: Option<PathBuf>,
    },

    /// Render the page once for the given selection
    Render {
        #[arg(short, long, help = "Input CSV file with daily temperatures")]
        data: Option<PathBuf>,

        #[arg(
            short,
            long = "city",
            help = "City to compare (repeat up to 4 times) [default: configured presets]"
        )]
        cities: Vec<String>,

        #[arg(long, value_parser = parse_date_arg)]
        start: Option<NaiveDate>,

        #[arg(long, value_parser = parse_date_arg)]
        end: Option<NaiveDate>,

        #[arg(short = 'o', long, help = "Output SVG chart path")]
        chart_output: Option<PathBuf>,

        #[arg(long, default_value = "false", help = "Expand the complete dataset table")]
        show_table: bool,
    },

    /// Print summary statistics for the dataset
    Summary {
        #[arg(short, long, help = "Input CSV file with daily temperatures")]
        data: Option<PathBuf>,

        #[arg(long, default_value = "false", help = "Print as JSON")]
        json: bool,
    },
}

fn parse_date_arg(value: &str) -> std::result::Result<NaiveDate, String> {
    crate::utils::parse_date(value).map_err(|e| e.to_string())
}
