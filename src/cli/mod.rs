//! CLI definitions and entry point.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;

/// Report, explore and follow civic issues in your community
#[derive(Parser, Debug)]
#[command(name = "civic", author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Display name used for "my reports" and comments
    #[arg(long, global = true)]
    pub actor: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Skip the pause before redirecting after a submission
    #[arg(long, global = true)]
    pub no_wait: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "CIVIC_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Landing page with platform totals
    Home,

    /// Report a new issue
    Report(ReportArgs),

    /// Browse and filter reported issues
    #[command(alias = "list")]
    Explore(ExploreArgs),

    /// Show issue details
    Show {
        /// Issue ID
        id: String,
    },

    /// Comment on an issue
    Comment {
        /// Issue ID
        id: String,

        /// Comment text
        text: String,
    },

    /// Support an issue
    Vote(VoteArgs),

    /// Get a shareable link for an issue
    Share {
        /// Issue ID
        id: String,
    },

    /// Your dashboard: reports, profile, notifications, settings
    #[command(alias = "my-reports")]
    Mine(MineArgs),

    /// Administration: dashboard, issue table, analytics, moderation
    Admin(AdminArgs),

    /// Sign-in page
    Login,

    /// About the platform
    About,

    /// Open a page by route path (e.g. /issue/4)
    Open {
        /// Route path
        path: String,
    },

    /// Print JSON Schemas for the data model
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version,
}

/// Arguments for the completions command.
#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: ShellType,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Supported shells for completion generation.
#[derive(ValueEnum, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ShellType {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    #[value(name = "powershell")]
    #[value(alias = "pwsh")]
    /// `PowerShell`
    PowerShell,
    /// Elvish
    Elvish,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Brief description of the issue
    #[arg(long)]
    pub title: Option<String>,

    /// Detailed description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Category (e.g. "Street Lighting", lighting, water)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Severity (Low, Medium, High, Critical)
    #[arg(long, short = 's')]
    pub severity: Option<String>,

    /// Street address or landmark
    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Photo to attach (can be repeated)
    #[arg(long = "photo")]
    pub photos: Vec<String>,
}

/// Layout for the explore page.
#[derive(ValueEnum, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExploreArgs {
    /// Search title, description and address
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by status
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Filter by severity
    #[arg(long)]
    pub severity: Option<String>,

    /// Maximum number of results (0 = unlimited)
    #[arg(long)]
    pub limit: Option<usize>,

    /// List or map view
    #[arg(long, value_enum, default_value_t)]
    pub view: ViewMode,
}

#[derive(Args, Debug, Clone)]
pub struct VoteArgs {
    /// Issue ID
    pub id: String,

    /// Press the support button this many times
    #[arg(long, default_value_t = 1)]
    pub times: u32,
}

/// Tabs on the personal dashboard.
#[derive(ValueEnum, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum MineTab {
    #[default]
    Reports,
    Profile,
    Notifications,
    Settings,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MineArgs {
    /// Dashboard tab
    #[arg(long, value_enum, default_value_t)]
    pub tab: MineTab,
}

/// Tabs on the admin panel.
#[derive(ValueEnum, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Issues,
    Analytics,
    Moderation,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AdminArgs {
    /// Panel tab
    #[arg(long, value_enum, default_value_t)]
    pub tab: AdminTab,

    /// Search the issue table (issues tab)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter the issue table by status (issues tab)
    #[arg(long, short = 's')]
    pub status: Option<String>,
}
