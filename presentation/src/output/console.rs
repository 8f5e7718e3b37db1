//! Console output formatter for answers and chat history

use colored::Colorize;
use supportbot_domain::util::preview;
use supportbot_domain::{AnswerSource, ChatRecord};

/// Characters of an answer shown per history entry.
const HISTORY_ANSWER_PREVIEW: usize = 160;

/// Formats answers and history for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The answer body followed by a dimmed line naming its source.
    pub fn format_answer(record: &ChatRecord) -> String {
        format!(
            "{}\n\n{} {}\n",
            record.answer,
            "answered by".dimmed(),
            Self::source_label(&record.source)
        )
    }

    /// Colored label for where an answer came from.
    pub fn source_label(source: &AnswerSource) -> String {
        let label = source.to_string();
        match source {
            AnswerSource::Provider(_) => label.green().to_string(),
            AnswerSource::ContextualProvider(_) => label.cyan().to_string(),
            AnswerSource::SearchDigest => label.blue().to_string(),
            AnswerSource::LocalRule(_) => label.yellow().to_string(),
        }
    }

    /// Records as a readable list (expects newest first).
    pub fn format_history(user: &str, records: &[ChatRecord]) -> String {
        if records.is_empty() {
            return format!("No history for {}.\n", user.bold());
        }

        let mut output = String::new();
        output.push_str(&Self::header(&format!(
            "History for {} ({} entries)",
            user,
            records.len()
        )));
        output.push('\n');

        for record in records {
            output.push_str(&format!(
                "\n{} {}\n",
                record
                    .created_at
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string()
                    .dimmed(),
                Self::source_label(&record.source)
            ));
            output.push_str(&format!("{} {}\n", "Q:".cyan().bold(), record.question));
            output.push_str(&format!(
                "{} {}\n",
                "A:".green().bold(),
                preview(&record.answer, HISTORY_ANSWER_PREVIEW)
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_history_json(records: &[ChatRecord]) -> String {
        serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn welcome(user: &str, providers: &[String]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("supportbot - Chat Mode"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "User:".cyan().bold(), user));
        let chain = if providers.is_empty() {
            "local answers only".to_string()
        } else {
            providers.join(" -> ")
        };
        output.push_str(&format!("{} {}\n", "Providers:".cyan().bold(), chain));
        output.push('\n');
        output.push_str(&Self::help());
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push_str("Commands:\n");
        output.push_str("  /help, /h, /?      - Show this help\n");
        output.push_str("  /history [N]       - Show your last N questions (default 10)\n");
        output.push_str("  /quit, /exit, /q   - Exit chat\n");
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use supportbot_domain::{Answer, ProviderKind, Question, UserId};

    fn record(question: &str, answer: &str, source: AnswerSource) -> ChatRecord {
        ChatRecord::at(
            UserId::try_new("alice").unwrap(),
            Question::try_new(question).unwrap(),
            Answer::new(answer, source),
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_format_answer_names_source() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_answer(&record(
            "What is the latest news today?",
            "Here is the news.",
            AnswerSource::ContextualProvider(ProviderKind::Gemini),
        ));
        assert!(output.starts_with("Here is the news."));
        assert!(output.contains("answered by gemini+search"));
    }

    #[test]
    fn test_format_history_lists_entries() {
        colored::control::set_override(false);
        let records = vec![
            record("second", "two", AnswerSource::SearchDigest),
            record("first", &"long ".repeat(100), AnswerSource::LocalRule("default".into())),
        ];
        let output = ConsoleFormatter::format_history("alice", &records);

        assert!(output.contains("History for alice (2 entries)"));
        assert!(output.contains("2024-06-01 08:30:00 UTC"));
        assert!(output.find("Q: second").unwrap() < output.find("Q: first").unwrap());
        assert!(output.contains("local:default"));
        assert!(output.contains("..."));
    }

    #[test]
    fn test_format_history_empty() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format_history("bob", &[]),
            "No history for bob.\n"
        );
    }

    #[test]
    fn test_format_history_json() {
        let records = vec![record("q", "a", AnswerSource::Provider(ProviderKind::OpenAi))];
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_history_json(&records)).unwrap();
        assert_eq!(json[0]["question"], "q");
        assert_eq!(json[0]["user"], "alice");
        assert_eq!(json[0]["source"]["kind"], "provider");
        assert_eq!(json[0]["source"]["detail"], "openai");
    }
}
