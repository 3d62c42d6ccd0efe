use clap::{ArgAction, Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "taskboard",
    version = VERSION,
    about = "Terminal client and dashboard for a task-management REST service",
    after_help = "\
CONFIGURATION:
  The service URL is taken from --api-url, then $TASKBOARD_API_URL, then the
  nearest .taskboard/config.json (see `taskboard init`), then http://localhost:8000.

EXIT CODES:
  0  Success
  1  Error (validation, task not found, service or network failure)

DATES:
  --due and --now accept YYYY-MM-DD, YYYY-MM-DDTHH:MM[:SS] (UTC) or RFC 3339.
  A task is overdue when its due date has passed and it is not completed.
  A task is due soon when it is due within the next 7 days and not completed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Base URL of the task service
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Reference instant for due-date computations (default: current time)
    #[arg(long, global = true, value_name = "DATETIME")]
    pub now: Option<String>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write .taskboard/config.json in the current directory
    Init {
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Task management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Show task counts by status and the completion rate
    Stats {
        /// Use the service's summary endpoint instead of computing locally
        #[arg(long)]
        remote: bool,
    },

    /// Totals, priority breakdown, tasks due this week and overdue tasks
    Dashboard,

    /// Weather lookups from the task service
    #[command(after_help = "\
NOTE:
  With a task ID: the service's due-date status for that task.
  Without: a weather report for --lat/--lon (and optional --date).")]
    Weather {
        /// Task ID
        id: Option<i64>,
        #[arg(long, conflicts_with = "id", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, conflicts_with = "id", allow_hyphen_values = true)]
        lon: Option<f64>,
        #[arg(long, conflicts_with = "id")]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a task
    Add {
        /// Task title
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// low | medium | high
        #[arg(long, default_value = "medium")]
        priority: String,
        /// todo | in_progress | completed
        #[arg(long, default_value = "todo")]
        status: String,
        /// Due date
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks, newest first
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// Only overdue tasks
        #[arg(long, conflicts_with = "due_soon")]
        overdue: bool,
        /// Only tasks due within the next 7 days
        #[arg(long)]
        due_soon: bool,
    },
    /// Show task details
    Show {
        id: i64,
    },
    /// Change fields of a task
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },
    /// Set a task in progress
    Start {
        id: i64,
    },
    /// Mark a task completed
    Done {
        id: i64,
    },
    /// Delete a task
    Delete {
        id: i64,
    },
}
