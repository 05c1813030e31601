//! CLI probe for the task list core.
//!
//! # Responsibility
//! - Drive `TaskStore` against an on-disk cookie database from a shell.
//! - Keep output plain and deterministic for quick local checks.
//!
//! Usage: `tidyday_cli <db_path> <list|add|toggle|edit|delete|finish> [args]`
//! Set `TIDYDAY_LOG_DIR` (absolute path) to enable file logging and
//! `TIDYDAY_CONFIG` to a JSON file to override cookie settings.

use log::info;
use std::process::ExitCode;
use tidyday_core::db::open_db;
use tidyday_core::{
    core_version, init_logging, CookieTaskPersistence, CoreConfig, MessageSink, SqliteCookieJar,
    TaskIntent, TaskPersistence, TaskStore,
};

const LOG_DIR_ENV: &str = "TIDYDAY_LOG_DIR";
const CONFIG_ENV: &str = "TIDYDAY_CONFIG";

const USAGE: &str = "usage: tidyday_cli <db_path> <command> [args]
commands:
  list
  add <text>
  toggle <index>
  edit <index> <text>
  delete <index>
  finish";

struct StdoutSink;

impl MessageSink for StdoutSink {
    fn show(&mut self, message: &str) {
        println!("{message}");
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let (db_path, command) = match args {
        [flag] if flag == "--version" => {
            println!("tidyday_core version={}", core_version());
            return Ok(());
        }
        [db_path, rest @ ..] if !rest.is_empty() => (db_path, rest),
        _ => return Err(USAGE.to_string()),
    };

    let config = load_config()?;
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        init_logging(&config.log_level, log_dir.as_str())
            .map_err(|err| format!("logging setup failed: {err}"))?;
    }
    info!("event=cli_command module=cli status=start command={}", command[0]);

    let conn = open_db(db_path).map_err(|err| format!("open `{db_path}` failed: {err}"))?;
    let persistence = CookieTaskPersistence::with_config(SqliteCookieJar::new(&conn), &config);
    let mut store = TaskStore::open(persistence);

    if command[0] == "list" {
        print_tasks(&store);
        return Ok(());
    }

    let intent = parse_intent(command)?;
    let is_summary = intent == TaskIntent::SummaryRequested;
    store
        .dispatch(intent, &mut StdoutSink)
        .map_err(|err| err.to_string())?;
    if !is_summary {
        print_tasks(&store);
    }
    Ok(())
}

fn load_config() -> Result<CoreConfig, String> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(CoreConfig::default());
    };
    let json = std::fs::read_to_string(&path)
        .map_err(|err| format!("read config `{path}` failed: {err}"))?;
    CoreConfig::from_json_str(&json).map_err(|err| format!("config `{path}`: {err}"))
}

fn parse_intent(command: &[String]) -> Result<TaskIntent, String> {
    let intent = match command {
        [cmd, text @ ..] if cmd == "add" && !text.is_empty() => {
            TaskIntent::AddRequested(text.join(" "))
        }
        [cmd, index] if cmd == "toggle" => TaskIntent::ToggleRequested(parse_index(index)?),
        [cmd, index, text @ ..] if cmd == "edit" => {
            TaskIntent::EditRequested(parse_index(index)?, text.join(" "))
        }
        [cmd, index] if cmd == "delete" => TaskIntent::DeleteRequested(parse_index(index)?),
        [cmd] if cmd == "finish" => TaskIntent::SummaryRequested,
        _ => return Err(USAGE.to_string()),
    };
    Ok(intent)
}

fn parse_index(raw: &str) -> Result<usize, String> {
    raw.parse()
        .map_err(|_| format!("index must be a non-negative integer, got `{raw}`"))
}

fn print_tasks<P: TaskPersistence>(store: &TaskStore<P>) {
    if store.is_empty() {
        println!("(no tasks)");
        return;
    }
    for (index, task) in store.tasks().iter().enumerate() {
        let mark = if task.done { 'x' } else { ' ' };
        println!("{index:>3} [{mark}] {}", task.text);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_index, parse_intent};
    use tidyday_core::TaskIntent;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn add_joins_remaining_words() {
        let intent = parse_intent(&args(&["add", "buy", "oat", "milk"])).unwrap();
        assert_eq!(intent, TaskIntent::AddRequested("buy oat milk".to_string()));
    }

    #[test]
    fn edit_allows_empty_text() {
        let intent = parse_intent(&args(&["edit", "2"])).unwrap();
        assert_eq!(intent, TaskIntent::EditRequested(2, String::new()));
    }

    #[test]
    fn unknown_command_prints_usage() {
        assert!(parse_intent(&args(&["archive"])).unwrap_err().starts_with("usage:"));
    }

    #[test]
    fn negative_index_is_rejected() {
        assert!(parse_index("-1").is_err());
    }
}
