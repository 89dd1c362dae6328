use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[*] tend v", env!("CARGO_PKG_VERSION"), " - todos and habits in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a todo
    Add(AddArgs),
    /// List todos
    List(ListArgs),
    /// Toggle a todo's completed flag
    Done(DoneArgs),
    /// Edit a todo's fields (unset fields keep their value)
    Edit(EditArgs),
    /// Delete a todo
    Rm(RmArgs),
    /// List habits, or add a new one
    Habit(HabitCmd),
    /// Toggle a habit's completed flag
    HabitToggle(HabitToggleArgs),
    /// Delete a habit
    HabitRm(HabitRmArgs),
}

// ---------------------------------------------------------------------------
// Todo command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Todo title
    pub title: String,
    /// Description
    #[arg(long, default_value = "")]
    pub desc: String,
    /// Priority (low, medium, high)
    #[arg(long)]
    pub priority: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only pending todos
    #[arg(long, conflicts_with = "completed")]
    pub pending: bool,
    /// Show only completed todos
    #[arg(long)]
    pub completed: bool,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Key of the todo to toggle
    pub key: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Key of the todo to edit
    pub key: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description
    #[arg(long)]
    pub desc: Option<String>,
    /// New priority (low, medium, high)
    #[arg(long)]
    pub priority: Option<String>,
    /// New due date (YYYY-MM-DD, empty string clears it)
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Key of the todo to delete
    pub key: String,
}

// ---------------------------------------------------------------------------
// Habit command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct HabitCmd {
    /// Habit text to add (if omitted, lists habits)
    pub text: Option<String>,
}

#[derive(Args)]
pub struct HabitToggleArgs {
    /// Id of the habit to toggle
    pub id: String,
}

#[derive(Args)]
pub struct HabitRmArgs {
    /// Id of the habit to delete
    pub id: String,
}
