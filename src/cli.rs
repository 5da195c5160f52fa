use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Path to the configuration file
    #[clap(name = "config")]
    pub config: PathBuf,

    /// Day to render, defaults to today (YYYY-MM-DD)
    #[clap(long)]
    pub date: Option<NaiveDate>,

    /// View to render
    #[clap(long, value_enum, default_value = "month")]
    pub view: View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    Month,
    Week,
    Agenda,
}
