//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for supportbot
#[derive(Parser, Debug)]
#[command(name = "supportbot")]
#[command(author, version, about = "Chat assistant that always has an answer")]
#[command(arg_required_else_help = true)]
#[command(long_about = r#"
supportbot answers questions through a chain of sources:

1. Answer providers, tried in order (Anthropic, OpenAI, Gemini, Dialogflow)
2. For time-sensitive questions: a web search, then the providers again
   with the results as context, or the results themselves
3. A built-in rule table that always has something to say

Providers without credentials are skipped. Credentials are read from the
environment first (ANTHROPIC_API_KEY, OPENAI_API_KEY, GOOGLE_API_KEY,
DIALOGFLOW_PROJECT_ID + DIALOGFLOW_ACCESS_TOKEN, GOOGLE_SEARCH_API_KEY),
then from the configuration file.

Configuration files are loaded from (in priority order):
1. SUPPORTBOT_* environment variables
2. --config <path>        Explicit config file
3. ./supportbot.toml      Project-level config
4. ~/.config/supportbot/config.toml   Global config

Example:
  supportbot ask "What is the capital of France?"
  supportbot ask --user alice "What's the latest news today?"
  supportbot chat --user alice
  supportbot history --user alice --limit 5
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask a single question and print the answer
    Ask {
        /// User the question is recorded under
        #[arg(short, long, value_name = "NAME")]
        user: Option<String>,

        /// Suppress the progress spinner
        #[arg(short, long)]
        quiet: bool,

        /// The question (words are joined with spaces)
        #[arg(value_name = "QUESTION", num_args = 0.., trailing_var_arg = true)]
        question: Vec<String>,
    },

    /// Start an interactive chat session
    Chat {
        #[arg(short, long, value_name = "NAME")]
        user: Option<String>,

        /// Suppress the progress spinner
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show past questions, newest first
    History {
        #[arg(short, long, value_name = "NAME")]
        user: Option<String>,

        /// Maximum number of entries
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// The `--user` given to any subcommand.
    pub fn user(&self) -> Option<&str> {
        match self {
            Command::Ask { user, .. } | Command::Chat { user, .. } | Command::History { user, .. } => {
                user.as_deref()
            }
        }
    }
}

/// Join the words of a question given as separate arguments.
pub fn join_question(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::parse_from(["supportbot", "ask", "--user", "alice", "largest", "ocean"]);
        match cli.command {
            Some(Command::Ask { user, question, .. }) => {
                assert_eq!(user.as_deref(), Some("alice"));
                assert_eq!(join_question(&question), "largest ocean");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ask_without_question_parses_empty() {
        let cli = Cli::parse_from(["supportbot", "ask"]);
        match cli.command {
            Some(Command::Ask { question, .. }) => assert!(question.is_empty()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_history_flags_and_globals() {
        let cli = Cli::parse_from([
            "supportbot",
            "history",
            "-u",
            "bob",
            "--limit",
            "3",
            "--json",
            "-vv",
            "--no-config",
        ]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
        let command = cli.command.unwrap();
        assert_eq!(command.user(), Some("bob"));
        assert!(matches!(
            command,
            Command::History {
                limit: Some(3),
                json: true,
                ..
            }
        ));
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::parse_from(["supportbot", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
