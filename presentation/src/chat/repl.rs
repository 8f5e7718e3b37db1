//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::progress::ResolutionSpinner;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;
use supportbot_application::{AskQuestionInput, AskQuestionUseCase, ChatHistoryUseCase};

/// Entries kept in the line-editor history file.
const LINE_HISTORY_CAPACITY: usize = 1000;
const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Slash commands understood by the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    History(usize),
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/history" => match parts.next().map(str::parse::<usize>) {
                None => ReplCommand::History(DEFAULT_HISTORY_LIMIT),
                Some(Ok(n)) if n > 0 => ReplCommand::History(n),
                Some(_) => ReplCommand::Unknown(line.to_string()),
            },
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    ask: Arc<AskQuestionUseCase>,
    history: Arc<ChatHistoryUseCase>,
    user: String,
    show_progress: bool,
    line_history: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(ask: Arc<AskQuestionUseCase>, history: Arc<ChatHistoryUseCase>, user: impl Into<String>) -> Self {
        Self {
            ask,
            history,
            user: user.into(),
            show_progress: true,
            line_history: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Persist typed lines to `path` between sessions.
    pub fn with_line_history(mut self, path: Option<PathBuf>) -> Self {
        self.line_history = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.user.clone()),
            DefaultPromptSegment::Empty,
        );

        let providers: Vec<String> = self
            .ask
            .resolver()
            .provider_order()
            .iter()
            .map(|k| k.display_name().to_string())
            .collect();
        println!();
        println!("{}", ConsoleFormatter::welcome(&self.user, &providers));

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(ReplCommand::parse(line)).await {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.line_history.clone() else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(LINE_HISTORY_CAPACITY, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                eprintln!("Line history unavailable: {}", e);
                editor
            }
        }
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                println!("{}", ConsoleFormatter::help());
                false
            }
            ReplCommand::History(limit) => {
                match self.history.execute(&self.user, Some(limit)).await {
                    Ok(records) => {
                        println!();
                        println!("{}", ConsoleFormatter::format_history(&self.user, &records));
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
                false
            }
            ReplCommand::Unknown(line) => {
                println!("Unknown command: {}", line);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&self, question: &str) {
        println!();

        let spinner = ResolutionSpinner::start("Thinking...", self.show_progress);
        let result = self
            .ask
            .execute(AskQuestionInput::new(self.user.as_str(), question))
            .await;
        spinner.finish();

        match result {
            Ok(output) => {
                println!("{}", ConsoleFormatter::format_answer(&output.record));
                if !output.persisted {
                    eprintln!("(this answer could not be saved to history)");
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
