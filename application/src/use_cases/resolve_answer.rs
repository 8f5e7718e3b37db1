//! Resolve Answer use case. The answer resolution chain.
//!
//! Tries every configured [`AnswerProvider`] in priority order; the first
//! non-absent answer wins. When all of them come back empty and the question
//! is freshness-flagged, a web search is run and the context-capable
//! providers are retried with the results as grounding. If nobody can use
//! the results they are returned as a digest. Everything else ends in the
//! [`LocalResponder`], so resolution never fails.
//!
//! ```text
//! providers (A, B, C, D) ──none──▶ freshness? ──yes──▶ search ──results──▶ providers with context (A, B, C)
//!        │                             │ no                │ none                  │ none
//!        ▼                             ▼                   ▼                       ▼
//!     answer                    local responder     local responder          search digest
//! ```
//!
//! Attempts are strictly sequential.

use crate::config::ResolutionParams;
use crate::ports::answer_provider::{AnswerProvider, AnswerRequest};
use crate::ports::context_retriever::{ContextRetriever, NoContextRetriever};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use std::sync::Arc;
use supportbot_domain::util::preview;
use supportbot_domain::{
    Answer, AnswerSource, ContextBlock, FreshnessClassifier, LocalResponder, ProviderKind,
    Question, SearchResult, SessionId, search_digest,
};
use tracing::{debug, info};

/// The answer resolution chain.
#[derive(Clone)]
pub struct ResolveAnswerUseCase {
    providers: Vec<Arc<dyn AnswerProvider>>,
    retriever: Arc<dyn ContextRetriever>,
    responder: LocalResponder,
    classifier: FreshnessClassifier,
    params: ResolutionParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ResolveAnswerUseCase {
    /// Chain over `providers` (in priority order) ending in `responder`.
    ///
    /// Web search stays disabled until [`with_retriever`](Self::with_retriever).
    pub fn new(providers: Vec<Arc<dyn AnswerProvider>>, responder: LocalResponder) -> Self {
        Self {
            providers,
            retriever: Arc::new(NoContextRetriever),
            responder,
            classifier: FreshnessClassifier::default(),
            params: ResolutionParams::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_retriever(mut self, retriever: Arc<dyn ContextRetriever>) -> Self {
        self.retriever = retriever;
        self
    }

    pub fn with_classifier(mut self, classifier: FreshnessClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_params(mut self, params: ResolutionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Provider kinds in the order they are tried.
    pub fn provider_order(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    /// Resolve one question into exactly one non-empty answer.
    pub async fn resolve(&self, question: &Question, session: &SessionId) -> Answer {
        info!("Processing question: {}", preview(question.content(), 50));

        let fresh_keyword = self.classifier.matched_keyword(question);
        let answer = self.run_chain(question, session, fresh_keyword).await;

        info!(source = %answer.source(), "Resolved answer");
        self.conversation_logger.log(ConversationEvent::new(
            "answer_resolved",
            serde_json::json!({
                "session": session.as_str(),
                "question": preview(question.content(), 200),
                "freshness_keyword": fresh_keyword,
                "source": answer.source(),
                "bytes": answer.body().len(),
            }),
        ));
        answer
    }

    async fn run_chain(
        &self,
        question: &Question,
        session: &SessionId,
        fresh_keyword: Option<&str>,
    ) -> Answer {
        let request = AnswerRequest::new(question, session);
        if let Some(answer) = self.first_answer(request).await {
            return answer;
        }

        if let Some(keyword) = fresh_keyword {
            if self.params.search_enabled {
                debug!(keyword, "Freshness-flagged question, trying web search");
                if let Some(answer) = self.search_augmented(question, session).await {
                    return answer;
                }
            } else {
                debug!(keyword, "Freshness-flagged question, but web search is disabled");
            }
        }

        let local = self.responder.respond(question);
        debug!(rule = local.rule, "Using local responder");
        Answer::new(local.body, AnswerSource::LocalRule(local.rule.to_string()))
    }

    /// First provider that answers; context-incapable providers are skipped
    /// when the request carries context.
    async fn first_answer(&self, request: AnswerRequest<'_>) -> Option<Answer> {
        let contextual = request.context.is_some();
        for provider in &self.providers {
            if contextual && !provider.supports_context() {
                continue;
            }
            if let Some(text) = provider.try_answer(request).await {
                let kind = provider.kind();
                let source = if contextual {
                    AnswerSource::ContextualProvider(kind)
                } else {
                    AnswerSource::Provider(kind)
                };
                return Some(Answer::new(text, source));
            }
        }
        None
    }

    async fn search_augmented(&self, question: &Question, session: &SessionId) -> Option<Answer> {
        let results: Vec<SearchResult> = self
            .retriever
            .try_search(question.content(), self.params.search_results)
            .await?;

        let cap = self.params.presented_results;
        if let Some(context) = ContextBlock::from_results_capped(&results, cap) {
            let request = AnswerRequest::new(question, session).with_context(&context);
            if let Some(answer) = self.first_answer(request).await {
                return Some(answer);
            }
        }

        debug!("No provider could use the search results, returning digest");
        Some(Answer::new(
            search_digest(question.content(), &results, cap),
            AnswerSource::SearchDigest,
        ))
    }
}
