use crate::export::ExportFormat;
use crate::models::draft::RawDraft;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for shiftboard
#[derive(Parser)]
#[command(
    name = "shiftboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A job board CLI: post part-time listings, check shift durations, search, apply and bid",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user (overrides `default_user` from the configuration)
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Schedule fields shared by `check` and `post`.
#[derive(Args, Clone, Debug, Default)]
pub struct ScheduleArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long = "from")]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long = "upto")]
    pub upto: Option<String>,

    /// Shift starts at (HH:MM)
    #[arg(long = "shift-start")]
    pub shift_start: Option<String>,

    /// Shift ends at (HH:MM)
    #[arg(long = "shift-end")]
    pub shift_end: Option<String>,

    /// Break in hours (1 = 1 hour; 0.5 = 30 minutes)
    #[arg(long = "break", allow_hyphen_values = true)]
    pub break_hours: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the duration summaries for a schedule without saving anything
    Check {
        #[command(flatten)]
        schedule: ScheduleArgs,
    },

    /// List a new job, or edit one of yours with --edit
    Post {
        #[arg(long)]
        category: Option<String>,

        #[arg(long = "short-desc")]
        short_desc: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[command(flatten)]
        schedule: ScheduleArgs,

        #[arg(long, allow_hyphen_values = true)]
        salary: Option<String>,

        /// e.g. "per day", "negotiable"
        #[arg(long = "salary-condition")]
        salary_condition: Option<String>,

        #[arg(long = "long-desc")]
        long_desc: Option<String>,

        /// Listing id to edit (must be yours)
        #[arg(long = "edit", value_name = "ID")]
        edit: Option<i64>,
    },

    /// Browse listings
    List {
        /// Case-insensitive search on the category
        #[arg(long, short)]
        search: Option<String>,

        /// Only the listings you posted
        #[arg(long)]
        mine: bool,

        /// Filter by status: active, closed
        #[arg(long)]
        status: Option<String>,
    },

    /// Show the details of a listing
    Show {
        id: i64,
    },

    /// Apply to a listing, or bid a different salary with --bid
    Apply {
        id: i64,

        /// Desired salary
        #[arg(long, allow_hyphen_values = true)]
        bid: Option<f64>,

        /// Reason for the bid
        #[arg(long, requires = "bid")]
        reason: Option<String>,
    },

    /// List the applications to one of your listings
    Applicants {
        id: i64,
    },

    /// Change the status of one of your listings
    Status {
        id: i64,

        /// active or closed
        status: String,
    },

    /// Show your profile, or change it with --set
    Profile {
        #[arg(long = "print", conflicts_with = "set", help = "Print your profile (default)")]
        print: bool,

        #[arg(long = "set", help = "Update the fields given below")]
        set: bool,

        #[arg(long, requires = "set")]
        location: Option<String>,

        /// Visible in the part-timer directory: true or false
        #[arg(long, requires = "set", value_name = "BOOL")]
        available: Option<bool>,

        /// Job category you are interested in
        #[arg(long = "category", requires = "set")]
        interested_category: Option<String>,

        /// Preferred skills
        #[arg(long, requires = "set")]
        skills: Option<String>,

        #[arg(long, requires = "set")]
        about: Option<String>,
    },

    /// Browse visible part-timer profiles
    Parttimers {
        /// Case-insensitive search on the name
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Export listings
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Only listings whose category matches
        #[arg(long)]
        search: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

impl ScheduleArgs {
    /// Copy the schedule fields into a raw form.
    pub fn fill(&self, raw: &mut RawDraft) {
        raw.duration_from = self.from.clone();
        raw.duration_upto = self.upto.clone();
        raw.start_of_shift = self.shift_start.clone();
        raw.end_of_shift = self.shift_end.clone();
        raw.break_hours = self.break_hours.clone();
    }

    pub fn to_raw(&self) -> RawDraft {
        let mut raw = RawDraft::default();
        self.fill(&mut raw);
        raw
    }
}
