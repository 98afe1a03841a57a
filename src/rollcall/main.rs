use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rollcall::api::RollcallApi;
use rollcall::commands::{CmdMessage, CmdResult, Command, MessageLevel, StudentEdit};
use rollcall::config::RollcallConfig;
use rollcall::error::{Result, RollcallError};
use rollcall::model::{Student, StudentDraft};
use rollcall::roster::Roster;
use rollcall::storage::fs::JsonFileStorage;
use rollcall::view::StudentFilter;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "ROLLCALL_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut api = open_api()?;
    let command = to_command(cli.command);
    let result = api.execute_today(&command)?;

    print_result(&api, &command, &result);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "rollcall=debug" } else { "rollcall=warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    // stdout carries command output only
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "rollcall", "rollcall")
        .ok_or_else(|| RollcallError::Command("Could not determine data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn open_api() -> Result<RollcallApi<JsonFileStorage>> {
    let data_dir = data_dir()?;
    let config = RollcallConfig::load(&data_dir)?;
    let roster_path = config.roster_path(&data_dir);
    tracing::debug!(path = %roster_path.display(), "opening roster");

    match RollcallApi::open(JsonFileStorage::new(&roster_path)) {
        Ok(api) => Ok(api),
        Err(e) if config.start_empty_on_load_error => {
            tracing::warn!(
                path = %roster_path.display(),
                error = %e,
                "could not load roster, starting with an empty one"
            );
            Ok(RollcallApi::new(
                JsonFileStorage::new(roster_path),
                Roster::new(),
            ))
        }
        Err(e) => Err(e),
    }
}

fn to_command(command: Option<Commands>) -> Command {
    match command {
        Some(Commands::Add {
            name,
            id,
            phone,
            email,
            address,
        }) => Command::Add(StudentDraft {
            name: Some(name),
            id: Some(id),
            phone: Some(phone),
            email: Some(email),
            address: Some(address),
            attendance: None,
        }),
        Some(Commands::Delete { id }) => Command::Delete { id },
        Some(Commands::Edit {
            id,
            name,
            new_id,
            phone,
            email,
            address,
        }) => Command::Edit {
            id,
            edit: StudentEdit {
                name,
                id: new_id,
                phone,
                email,
                address,
            },
        },
        Some(Commands::Find { keywords }) => Command::Find { keywords },
        Some(Commands::List) | None => Command::List,
        Some(Commands::Clear) => Command::Clear,
        Some(Commands::Mark { id }) => Command::Mark { id },
    }
}

fn print_result(api: &RollcallApi<JsonFileStorage>, command: &Command, result: &CmdResult) {
    match command {
        Command::List | Command::Find { .. } => {
            let listed: Vec<&Student> = result.listed_students.iter().collect();
            print_students(&listed);
        }
        _ if result.refresh_list => print_students(&api.view(StudentFilter::All).students()),
        _ => {}
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

const NAME_WIDTH: usize = 28;
const PHONE_WIDTH: usize = 14;
const PRESENT_MARKER: &str = "✓";

fn print_students(students: &[&Student]) {
    if students.is_empty() {
        println!("No students found.");
        return;
    }

    for (i, student) in students.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);

        let marker = if student.is_present() {
            PRESENT_MARKER.green()
        } else {
            " ".normal()
        };

        let name = truncate_to_width(student.name().as_str(), NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());

        let attendance = match student.attendance().last() {
            Some(last) => format!("{} days, last {}", student.attendance().len(), last),
            None => "never attended".to_string(),
        };

        println!(
            "{}{} {} {}{} {:<phone_width$} {}  {}",
            idx_str,
            marker,
            student.id().as_str().yellow(),
            name,
            " ".repeat(padding),
            student.phone().as_str(),
            student.email().as_str(),
            attendance.dimmed(),
            phone_width = PHONE_WIDTH
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_names() {
        assert_eq!(truncate_to_width("Carl Kurz", 28), "Carl Kurz");
    }

    #[test]
    fn truncate_by_display_width() {
        let truncated = truncate_to_width("Alexandrina Victoria Hanover", 10);
        assert_eq!(truncated, "Alexandri…");
        assert_eq!(truncated.width(), 10);

        // Wide characters take two columns each
        let wide = truncate_to_width("李小龙李小龙", 7);
        assert_eq!(wide, "李小龙…");
        assert!(wide.width() <= 7);
    }

    #[test]
    fn no_subcommand_lists() {
        assert_eq!(to_command(None), Command::List);
    }

    #[test]
    fn edit_maps_new_id() {
        let command = to_command(Some(Commands::Edit {
            id: "A01A".into(),
            name: None,
            new_id: Some("Z01Z".into()),
            phone: None,
            email: None,
            address: None,
        }));
        match command {
            Command::Edit { id, edit } => {
                assert_eq!(id, "A01A");
                assert_eq!(edit.id.as_deref(), Some("Z01Z"));
            }
            other => panic!("Expected edit, got {:?}", other),
        }
    }
}
