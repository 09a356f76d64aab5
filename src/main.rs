mod app;
mod domain;
mod error;
mod repo;
mod ui;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use time::macros::format_description;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use app::App;
use repo::file::FileTaskRepo;
use ui::Painter;

#[derive(Parser, Debug)]
#[command(author, version, about = "taskr: a personal task tracker", long_about = None)]
struct Args {
    /// Path to the tasks file
    #[arg(long, global = true, env = "TASKR_FILE", default_value = "tasks.txt")]
    file: PathBuf,

    /// Disable colored output
    #[arg(long, global = true, default_value_t = false)]
    no_color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "TASKR_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task
    Add {
        /// Task description
        description: String,

        /// Priority of the task
        #[arg(long, default_value = "low", value_parser = ["low", "medium", "high"], ignore_case = true)]
        priority: String,

        /// Due date in YYYY-MM-DD format
        #[arg(long, value_parser = parse_due_date)]
        due_date: Option<String>,
    },

    /// List tasks
    List {
        /// Show completed tasks
        #[arg(long, default_value_t = false)]
        show_completed: bool,

        /// Output as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Mark a task as completed
    Complete {
        /// Task number to mark as completed
        #[arg(allow_negative_numbers = true)]
        task_num: i64,
    },

    /// Delete a task
    Delete {
        /// Task number to delete
        #[arg(allow_negative_numbers = true)]
        task_num: i64,

        /// Delete from completed tasks
        #[arg(long, default_value_t = false)]
        completed: bool,
    },

    /// Search tasks by keyword
    Search {
        /// Keyword to search in task descriptions
        keyword: String,

        /// Output as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Sort pending tasks by priority and due date
    Prioritize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let Some(command) = args.command else {
        println!("Please specify a valid command. Use '-h' or '--help' for usage information.");
        Args::command().print_help()?;
        return Ok(());
    };

    let color = !args.no_color && std::io::stdout().is_terminal();
    let repo = FileTaskRepo::open(&args.file);
    debug!(file = %repo.path().display(), "using tasks file");
    let mut app = App::new(repo, Painter::new(color))?;
    for problem in app.skipped() {
        eprintln!("{}", ui::render_skipped(problem));
    }

    let output = match command {
        Command::Add {
            description,
            priority,
            due_date,
        } => app.add(&description, &priority, due_date.as_deref())?,
        Command::List {
            show_completed,
            json,
        } => app.list(show_completed, json)?,
        Command::Complete { task_num } => app.complete(task_num)?,
        Command::Delete {
            task_num,
            completed,
        } => app.delete(task_num, completed)?,
        Command::Search { keyword, json } => app.search(&keyword, json)?,
        Command::Prioritize => app.prioritize()?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(format!("taskr={level}"))
        .with_context(|| format!("invalid log level '{level}'"))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn parse_due_date(raw: &str) -> Result<String, String> {
    let format = format_description!("[year]-[month]-[day]");
    time::Date::parse(raw, &format)
        .map(|_| raw.to_string())
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
