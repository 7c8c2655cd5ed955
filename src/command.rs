// Line-oriented commands driving a TaskStore

use crate::filter::FilterState;
use crate::store::TaskStore;
use crate::task::TaskId;
use eyre::{Context, Result, bail, eyre};
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  add <text>            add a task
  toggle <id>           mark a task done / not done
  edit <id>             start or stop editing a task
  describe <id> <text>  set a task's description and close its editor
  finish <id>           close a task's editor
  tick <id> [n]         advance a task's timer by n seconds (default 1)
  delete <id>           delete a task
  clear                 delete all completed tasks
  filter <all|active|completed>
  list                  show visible tasks
  count                 show number of active tasks
  help                  show this help
  quit                  exit";

/// A single user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(TaskId),
    Edit(TaskId),
    Describe(TaskId, String),
    Finish(TaskId),
    Tick(TaskId, u32),
    Delete(TaskId),
    Clear,
    Filter(FilterState),
    List,
    Count,
    Help,
    Quit,
}

impl Command {
    /// Run the command against a store; returns whether the store changed
    pub fn apply(&self, store: &mut TaskStore) -> bool {
        match self {
            Command::Add(text) => {
                store.add_task(text);
                true
            }
            Command::Toggle(id) => store.toggle_done(*id),
            Command::Edit(id) => store.toggle_editing(*id),
            Command::Describe(id, text) => {
                let described = store.change_description(text, *id);
                let finished = store.finish_editing(*id);
                described || finished
            }
            Command::Finish(id) => store.finish_editing(*id),
            Command::Tick(id, n) => {
                let mut changed = false;
                for _ in 0..*n {
                    changed |= store.tick(*id);
                }
                changed
            }
            Command::Delete(id) => store.delete_task(*id),
            Command::Clear => store.clear_completed() > 0,
            Command::Filter(filter) => {
                let changed = store.filter() != *filter;
                store.set_filter(*filter);
                changed
            }
            Command::List | Command::Count | Command::Help | Command::Quit => false,
        }
    }
}

fn parse_id(arg: Option<&str>) -> Result<TaskId> {
    let arg = arg.ok_or_else(|| eyre!("Missing task id"))?;
    arg.parse().context(format!("Invalid task id: {}", arg))
}

fn require_text(rest: &str) -> Result<String> {
    let text = rest.trim();
    if text.is_empty() {
        bail!("Task description cannot be empty");
    }
    Ok(text.to_string())
}

impl FromStr for Command {
    type Err = eyre::Report;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => Command::Add(require_text(rest)?),
            "toggle" => Command::Toggle(parse_id(Some(rest))?),
            "edit" => Command::Edit(parse_id(Some(rest))?),
            "describe" => {
                let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Command::Describe(parse_id(Some(id))?, require_text(text)?)
            }
            "finish" => Command::Finish(parse_id(Some(rest))?),
            "tick" => {
                let mut args = rest.split_whitespace();
                let id = parse_id(args.next())?;
                let n = match args.next() {
                    Some(n) => n.parse().context(format!("Invalid tick count: {}", n))?,
                    None => 1,
                };
                Command::Tick(id, n)
            }
            "delete" => Command::Delete(parse_id(Some(rest))?),
            "clear" => Command::Clear,
            "filter" => Command::Filter(rest.parse()?),
            "list" => Command::List,
            "count" => Command::Count,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => bail!("Empty command"),
            other => bail!("Unknown command: {} (try 'help')", other),
        };

        Ok(command)
    }
}
