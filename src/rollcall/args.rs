use clap::{Parser, Subcommand};
use rollcall::commands::{add, clear, delete, edit, find, list, mark};

#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(about = "Student roster and attendance tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student
    #[command(alias = "a", after_help = add::USAGE)]
    Add {
        #[arg(short, long)]
        name: String,

        /// Student id (e.g. A01A)
        #[arg(short, long)]
        id: String,

        #[arg(short, long)]
        phone: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        address: String,
    },

    /// Delete a student
    #[command(alias = "rm", after_help = delete::USAGE)]
    Delete {
        /// Student id (e.g. A01A)
        id: String,
    },

    /// Change some of a student's details
    #[command(alias = "e", after_help = edit::USAGE)]
    Edit {
        /// Student id of the student to edit
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        /// New student id
        #[arg(short = 'i', long = "id")]
        new_id: Option<String>,

        #[arg(short, long)]
        phone: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        address: Option<String>,
    },

    /// Find students by name
    #[command(alias = "f", after_help = find::USAGE)]
    Find {
        /// Whole words of the name, any of which may match
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
    },

    /// List all students
    #[command(alias = "ls", after_help = list::USAGE)]
    List,

    /// Remove every student
    #[command(after_help = clear::USAGE)]
    Clear,

    /// Mark a student present today
    #[command(alias = "m", after_help = mark::USAGE)]
    Mark {
        /// Student id (e.g. A01A)
        id: String,
    },
}
