//! Line-oriented frontend
//!
//! Drives the same screen state as the TUI from stdin, one command per
//! line. Useful without a terminal and for scripting.

use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

use crate::app::mode::SubmitOutcome;
use crate::app::state::ScreenState;
use crate::{error, Result, TuidoError};

const HELP: &str = "\
commands:
  list              show todos
  json              show todos as JSON
  add | +           open the add form
  title <text>      set the draft title
  desc <text>       set the draft description
  submit            press Add
  cancel            press Cancel
  delete <id>       delete a todo
  mode              show the current mode
  help              show this help
  quit              exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    List,
    Json,
    Open,
    Title(String),
    Description(String),
    Submit,
    Cancel,
    Delete(u64),
    Mode,
    Help,
    Quit,
}

impl FromStr for SimpleCommand {
    type Err = TuidoError;

    fn from_str(line: &str) -> Result<Self> {
        // Text arguments are kept exactly as typed after the first space
        let (word, rest) = match line.trim_start().split_once(' ') {
            Some((word, rest)) => (word, Some(rest)),
            None => (line.trim(), None),
        };

        let command = match word {
            "list" | "ls" => SimpleCommand::List,
            "json" => SimpleCommand::Json,
            "add" | "+" => SimpleCommand::Open,
            "title" => SimpleCommand::Title(rest.unwrap_or_default().to_string()),
            "desc" | "description" => {
                SimpleCommand::Description(rest.unwrap_or_default().to_string())
            }
            "submit" | "ok" => SimpleCommand::Submit,
            "cancel" => SimpleCommand::Cancel,
            "delete" | "rm" => {
                let arg = rest.map(str::trim).unwrap_or_default();
                let id = arg.parse::<u64>().map_err(|_| {
                    TuidoError::CommandError(format!("Expected a numeric id, got '{}'", arg))
                })?;
                SimpleCommand::Delete(id)
            }
            "mode" => SimpleCommand::Mode,
            "help" | "?" => SimpleCommand::Help,
            "quit" | "q" | "exit" => SimpleCommand::Quit,
            other => {
                return Err(TuidoError::CommandError(format!(
                    "Unknown command '{}'",
                    other
                )))
            }
        };
        Ok(command)
    }
}

/// Output of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Silent,
    Quit,
}

/// Screen state driven by text commands
#[derive(Debug)]
pub struct SimpleSession {
    state: ScreenState,
}

impl SimpleSession {
    /// Create a session with a seeded store
    pub fn new() -> Self {
        let mut state = ScreenState::new();
        state.load_initial();
        Self { state }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn prompt(&self) -> String {
        format!("[{}]> ", self.state.mode().label())
    }

    pub fn execute(&mut self, command: SimpleCommand) -> Result<Reply> {
        let reply = match command {
            SimpleCommand::List => {
                let items = self.state.items();
                if items.is_empty() {
                    Reply::Text("(no todos)".to_string())
                } else {
                    let lines: Vec<String> = items.iter().map(|t| t.summary()).collect();
                    Reply::Text(lines.join("\n"))
                }
            }
            SimpleCommand::Json => Reply::Text(serde_json::to_string_pretty(self.state.items())?),
            SimpleCommand::Open => {
                self.state.press_plus();
                Reply::Silent
            }
            SimpleCommand::Title(text) => self.edit(|state| state.set_draft_title(text)),
            SimpleCommand::Description(text) => {
                self.edit(|state| state.set_draft_description(text))
            }
            // A rejected add leaves the form open without a message
            SimpleCommand::Submit => match self.state.press_add() {
                SubmitOutcome::Added(item) => Reply::Text(format!("added {}", item.summary())),
                SubmitOutcome::Rejected(_) => Reply::Silent,
                SubmitOutcome::Ignored => Reply::Text("open the form with `add` first".to_string()),
            },
            SimpleCommand::Cancel => {
                self.state.press_cancel();
                Reply::Silent
            }
            SimpleCommand::Delete(id) => match self.state.press_delete(id) {
                Some(item) => Reply::Text(format!("deleted {}", item.summary())),
                None => Reply::Silent,
            },
            SimpleCommand::Mode => Reply::Text(self.state.mode().label().to_string()),
            SimpleCommand::Help => Reply::Text(HELP.to_string()),
            SimpleCommand::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    fn edit(&mut self, f: impl FnOnce(&mut ScreenState) -> bool) -> Reply {
        if f(&mut self.state) {
            Reply::Silent
        } else {
            Reply::Text("open the form with `add` first".to_string())
        }
    }

    /// Read commands until `quit` or end of input
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        loop {
            writer.write_all(self.prompt().as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let reply = line
                .parse::<SimpleCommand>()
                .and_then(|command| self.execute(command));
            match reply {
                Ok(Reply::Text(text)) => writer.write_all(format!("{}\n", text).as_bytes()).await?,
                Ok(Reply::Silent) => {}
                Ok(Reply::Quit) => break,
                Err(err @ TuidoError::CommandError(_)) => {
                    let message = error::user_friendly_message(&err);
                    writer.write_all(format!("{}\n", message).as_bytes()).await?;
                }
                Err(err) => return Err(err),
            }
        }
        writer.flush().await?;
        Ok(())
    }
}

impl Default for SimpleSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the simple frontend on stdin/stdout
pub async fn run_simple() -> Result<()> {
    info!("starting simple frontend");
    let mut session = SimpleSession::new();
    session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    info!(items = session.state().items().len(), "simple frontend finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mode::ViewMode;

    #[test]
    fn test_parse_commands() {
        assert_eq!("list".parse::<SimpleCommand>().unwrap(), SimpleCommand::List);
        assert_eq!("+".parse::<SimpleCommand>().unwrap(), SimpleCommand::Open);
        assert_eq!(
            "title buy  milk ".parse::<SimpleCommand>().unwrap(),
            SimpleCommand::Title("buy  milk ".to_string())
        );
        assert_eq!(
            "title".parse::<SimpleCommand>().unwrap(),
            SimpleCommand::Title(String::new())
        );
        assert_eq!(
            "rm 12".parse::<SimpleCommand>().unwrap(),
            SimpleCommand::Delete(12)
        );
        assert_eq!("q".parse::<SimpleCommand>().unwrap(), SimpleCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "delete two".parse::<SimpleCommand>(),
            Err(TuidoError::CommandError(_))
        ));
        assert!(matches!(
            "frobnicate".parse::<SimpleCommand>(),
            Err(TuidoError::CommandError(_))
        ));
    }

    #[test]
    fn test_execute_add_flow() {
        let mut session = SimpleSession::new();
        assert_eq!(session.prompt(), "[list]> ");

        session.execute(SimpleCommand::Open).unwrap();
        assert_eq!(session.prompt(), "[add]> ");
        session.execute(SimpleCommand::Title("x".into())).unwrap();
        assert_eq!(session.execute(SimpleCommand::Submit).unwrap(), Reply::Silent);
        assert_eq!(session.state().mode(), ViewMode::Add);

        session.execute(SimpleCommand::Description("y".into())).unwrap();
        assert_eq!(
            session.execute(SimpleCommand::Submit).unwrap(),
            Reply::Text("added #4 x - y".to_string())
        );
        assert_eq!(session.state().mode(), ViewMode::List);
    }

    #[test]
    fn test_draft_commands_need_open_form() {
        let mut session = SimpleSession::new();
        assert!(matches!(
            session.execute(SimpleCommand::Title("x".into())).unwrap(),
            Reply::Text(_)
        ));
        assert!(session.state().draft().is_empty());
    }

    #[test]
    fn test_json_lists_items() {
        let mut session = SimpleSession::new();
        session.execute(SimpleCommand::Delete(1)).unwrap();
        let Reply::Text(json) = session.execute(SimpleCommand::Json).unwrap() else {
            panic!("expected text reply");
        };
        let parsed: Vec<crate::models::TodoItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[tokio::test]
    async fn test_run_script() {
        let script = "list\nadd\ntitle x\ndesc y\nsubmit\nbogus\ndelete 9\nquit\nlist\n";
        let mut output = Vec::new();
        let mut session = SimpleSession::new();
        session.run(script.as_bytes(), &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("#1 todo 1 - description 1"));
        assert!(output.contains("[add]> "));
        assert!(output.contains("added #4 x - y"));
        assert!(output.contains("Unknown command 'bogus'"));
        assert!(!output.contains("deleted"));
        assert_eq!(session.state().items().len(), 4);
    }
}
