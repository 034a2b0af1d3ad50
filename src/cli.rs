use anyhow::Result;
use chrono::{NaiveDate, Weekday};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contribmap")]
#[command(about = "Contribution activity calendar: trailing month grids and yearly rollups")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Contributions JSON file ('-' or omitted reads stdin)")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Selected year (defaults to the reference date's year)")]
    pub year: Option<i32>,

    #[arg(long, value_parser = parse_today, help = "Reference date (YYYY-MM-DD), defaults to the local date")]
    pub today: Option<NaiveDate>,

    #[arg(long, value_parser = parse_weekday, default_value = "sun", help = "First day of the week in the grid")]
    pub week_start: Weekday,

    #[arg(long, help = "Drop invalid records instead of failing", default_value_t = false)]
    pub lenient: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    Calendar {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON, one month per line")]
        ndjson: bool,

        #[arg(long, help = "List every active day below the grid")]
        details: bool,
    },
    Stats {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    Years,
}

fn parse_today(s: &str) -> std::result::Result<NaiveDate, String> {
    crate::util::parse_date(s).ok_or_else(|| format!("expected YYYY-MM-DD, got {s:?}"))
}

fn parse_weekday(s: &str) -> std::result::Result<Weekday, String> {
    s.parse::<Weekday>()
        .map_err(|_| format!("unknown weekday {s:?}"))
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Calendar { json, ndjson, details } => {
                crate::calendar::exec(self.common, json, ndjson, details)
            }
            Commands::Stats { json } => crate::calendar::exec_stats(self.common, json),
            Commands::Years => crate::calendar::exec_years(self.common),
        }
    }
}
