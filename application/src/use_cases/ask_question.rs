//! Ask Question use case.
//!
//! The inbound request boundary: validates the user and the question,
//! runs the resolution chain under the user's session and stores the
//! resulting [`ChatRecord`].

use super::resolve_answer::ResolveAnswerUseCase;
use crate::ports::chat_history::ChatHistoryRepository;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use std::sync::Arc;
use supportbot_domain::util::preview;
use supportbot_domain::{ChatRecord, DomainError, Question, SessionId, UserId};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum AskQuestionError {
    #[error("{0}")]
    Invalid(#[from] DomainError),
}

impl AskQuestionError {
    pub fn is_validation(&self) -> bool {
        match self {
            AskQuestionError::Invalid(e) => e.is_validation(),
        }
    }
}

/// Raw request as it arrives from the caller.
#[derive(Debug, Clone)]
pub struct AskQuestionInput {
    pub user: String,
    pub question: String,
}

impl AskQuestionInput {
    pub fn new(user: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            question: question.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AskQuestionOutput {
    pub record: ChatRecord,
    /// False when the history store rejected the record.
    pub persisted: bool,
}

pub struct AskQuestionUseCase {
    resolver: ResolveAnswerUseCase,
    history: Arc<dyn ChatHistoryRepository>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AskQuestionUseCase {
    pub fn new(resolver: ResolveAnswerUseCase, history: Arc<dyn ChatHistoryRepository>) -> Self {
        Self {
            resolver,
            history,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn resolver(&self) -> &ResolveAnswerUseCase {
        &self.resolver
    }

    pub async fn execute(
        &self,
        input: AskQuestionInput,
    ) -> Result<AskQuestionOutput, AskQuestionError> {
        let (user, question) = match validate(&input) {
            Ok(valid) => valid,
            Err(e) => {
                warn!("Rejected request: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "question_rejected",
                    serde_json::json!({
                        "user": input.user,
                        "question": preview(&input.question, 200),
                        "reason": e.to_string(),
                    }),
                ));
                return Err(e.into());
            }
        };

        let session = SessionId::for_user(&user);
        let answer = self.resolver.resolve(&question, &session).await;
        let record = ChatRecord::new(user, question, answer);

        let persisted = match self.history.append(&record).await {
            Ok(()) => true,
            Err(e) => {
                warn!(record = %record.id, "Failed to store chat record: {}", e);
                false
            }
        };
        info!(user = %record.user.as_str(), source = %record.source, "Question answered");

        Ok(AskQuestionOutput { record, persisted })
    }
}

fn validate(input: &AskQuestionInput) -> Result<(UserId, Question), DomainError> {
    let user = UserId::try_new(input.user.as_str())?;
    let question = Question::try_new(input.question.as_str())?;
    Ok((user, question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::answer_provider::{AnswerProvider, AnswerRequest, ProviderError};
    use crate::ports::chat_history::HistoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use supportbot_domain::responder::FixedPicker;
    use supportbot_domain::{AnswerSource, LocalResponder, ProviderKind};

    struct CountingProvider {
        calls: AtomicUsize,
        sessions: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AnswerProvider for CountingProvider {
        fn kind(&self) -> ProviderKind {
            ProviderKind::Dialogflow
        }

        fn supports_context(&self) -> bool {
            false
        }

        async fn answer(&self, request: AnswerRequest<'_>) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.sessions
                .lock()
                .unwrap()
                .push(request.session.as_str().to_string());
            Err(ProviderError::NotConfigured("no project".into()))
        }
    }

    #[derive(Default)]
    struct MemoryHistory {
        records: Mutex<Vec<ChatRecord>>,
        fail: bool,
    }

    #[async_trait]
    impl ChatHistoryRepository for MemoryHistory {
        async fn append(&self, record: &ChatRecord) -> Result<(), HistoryError> {
            if self.fail {
                return Err(HistoryError::Unavailable("disk full".into()));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn list_for_user(
            &self,
            user: &UserId,
            _limit: Option<usize>,
        ) -> Result<Vec<ChatRecord>, HistoryError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| &r.user == user)
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<String>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type.to_string());
        }
    }

    fn setup(
        history: Arc<MemoryHistory>,
    ) -> (AskQuestionUseCase, Arc<CountingProvider>, Arc<RecordingLogger>) {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
            sessions: Mutex::new(Vec::new()),
        });
        let resolver = ResolveAnswerUseCase::new(
            vec![provider.clone() as Arc<dyn AnswerProvider>],
            LocalResponder::new(Arc::new(FixedPicker(0))),
        );
        let logger = Arc::new(RecordingLogger::default());
        let use_case =
            AskQuestionUseCase::new(resolver, history).with_conversation_logger(logger.clone());
        (use_case, provider, logger)
    }

    #[tokio::test]
    async fn answers_and_persists() {
        let history = Arc::new(MemoryHistory::default());
        let (use_case, provider, _) = setup(history.clone());

        let output = use_case
            .execute(AskQuestionInput::new("alice", "What is the capital of France?"))
            .await
            .unwrap();

        assert!(output.persisted);
        assert_eq!(output.record.question, "What is the capital of France?");
        assert!(output.record.answer.contains("**Paris**"));
        assert_eq!(
            output.record.source,
            AnswerSource::LocalRule("capital_france".into())
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.sessions.lock().unwrap()[0], "user-alice");
        assert_eq!(history.records.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_question_is_rejected_before_resolution() {
        let history = Arc::new(MemoryHistory::default());
        let (use_case, provider, logger) = setup(history.clone());

        let err = use_case
            .execute(AskQuestionInput::new("alice", "   \n"))
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please provide a question");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert!(history.records.lock().unwrap().is_empty());
        assert_eq!(*logger.events.lock().unwrap(), vec!["question_rejected"]);
    }

    #[tokio::test]
    async fn blank_user_is_rejected() {
        let history = Arc::new(MemoryHistory::default());
        let (use_case, provider, _) = setup(history);

        let err = use_case
            .execute(AskQuestionInput::new("  ", "Hello"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AskQuestionError::Invalid(DomainError::InvalidUser(_))
        ));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn history_failure_keeps_answer() {
        let history = Arc::new(MemoryHistory {
            fail: true,
            ..Default::default()
        });
        let (use_case, _, _) = setup(history);

        let output = use_case
            .execute(AskQuestionInput::new("bob", "largest ocean"))
            .await
            .unwrap();

        assert!(!output.persisted);
        assert!(output.record.answer.contains("Pacific Ocean"));
    }
}
