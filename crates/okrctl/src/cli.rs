//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic.

use clap::{Args, Parser, Subcommand};
use okr_common::OkrFilter;

/// OKR Board CLI
#[derive(Parser)]
#[command(name = "okrctl")]
#[command(about = "OKR Board - objectives and key results in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend API base URL (overrides config file and $OKRBOARD_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and display the OKR board once
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Live-updating board with periodic refresh
    Watch {
        #[command(flatten)]
        filter: FilterArgs,

        /// Refresh interval in seconds (overrides config)
        #[arg(long)]
        interval: Option<u64>,
    },
}

/// Filter flags shared by list and watch.
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Filter by owner user id
    #[arg(long)]
    pub owner: Option<String>,

    /// Filter by period (e.g. "Q1")
    #[arg(long)]
    pub period: Option<String>,

    /// Filter by year
    #[arg(long)]
    pub year: Option<i32>,

    /// Filter by status token
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by category label
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by team id
    #[arg(long)]
    pub team: Option<String>,

    /// Filter by visibility
    #[arg(long)]
    pub visibility: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long)]
    pub limit: Option<u32>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> OkrFilter {
        OkrFilter {
            owner: self.owner.clone(),
            period: self.period.clone(),
            year: self.year,
            status: self.status.clone(),
            category: self.category.clone(),
            team: self.team.clone(),
            visibility: self.visibility.clone(),
            page: self.page,
            limit: self.limit,
        }
    }
}
