//! Handle User Turn use case.
//!
//! The session controller: takes one line of user text through topic gating
//! and, when on-topic, through the completion service.
//!
//! ```text
//! user text ──> append user turn ──> classify
//!                                      │
//!                  on-topic ───────────┴────────── off-topic
//!                     │                                │
//!        AwaitingCompletion: complete()           deflection
//!          (apology on failure), Idle                  │
//!                     └──────────> append assistant turn <┘
//! ```

use crate::config::SessionConfig;
use crate::ports::completion_client::CompletionClient;
use crate::ports::session_observer::{NoObserver, SessionObserver};
use std::sync::Arc;
use tracing::{debug, info, warn};
use wayfarer_domain::{CompletionRequest, Conversation, SessionState, TopicClassifier, Turn};

/// How a reply was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The completion service answered.
    Answered,
    /// The text was off-topic; the service was not called.
    Deflected,
    /// The service failed; the reply is the apology. Carries the cause for
    /// diagnostics only.
    Failed(String),
}

/// Result of handling one user turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReply {
    /// Text to display; identical to the appended assistant turn.
    pub text: String,
    pub outcome: TurnOutcome,
}

/// Use case for handling a single user turn.
pub struct HandleUserTurnUseCase {
    client: Arc<dyn CompletionClient>,
    classifier: Arc<dyn TopicClassifier>,
    observer: Arc<dyn SessionObserver>,
    config: SessionConfig,
}

impl HandleUserTurnUseCase {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        classifier: Arc<dyn TopicClassifier>,
        config: SessionConfig,
    ) -> Self {
        Self {
            client,
            classifier,
            observer: Arc::new(NoObserver),
            config,
        }
    }

    /// Create with a session observer.
    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Start a new conversation under the configured persona.
    pub fn start_session(&self) -> Conversation {
        Conversation::new(&self.config.persona)
    }

    /// Handle one user turn.
    ///
    /// Appends the user turn and then exactly one assistant turn whose
    /// content equals the returned reply text. Never fails: service errors
    /// become the persona's apology.
    pub async fn execute(&self, conversation: &mut Conversation, text: &str) -> TurnReply {
        conversation.append(Turn::user(text));

        let persona = &self.config.persona;
        let reply = if self.classifier.is_on_topic(text) {
            self.complete(conversation).await
        } else {
            debug!(chars = text.chars().count(), "Off-topic turn, deflecting");
            TurnReply {
                text: persona.deflection().to_string(),
                outcome: TurnOutcome::Deflected,
            }
        };

        conversation.append(Turn::assistant(reply.text.as_str()));
        reply
    }

    async fn complete(&self, conversation: &Conversation) -> TurnReply {
        let request = CompletionRequest::from_conversation(
            conversation,
            self.config.model.as_str(),
            self.config.system_prompt,
        );

        info!(
            model = %request.model,
            messages = request.messages.len(),
            "Requesting completion"
        );

        self.observer
            .on_state_change(SessionState::AwaitingCompletion);
        let result = self.client.complete(&request).await;
        self.observer.on_state_change(SessionState::Idle);

        match result {
            Ok(text) => TurnReply {
                text,
                outcome: TurnOutcome::Answered,
            },
            Err(e) => {
                // The cause can echo the upstream body; keep it out of default output.
                warn!("Completion failed, replying with apology");
                debug!(error = %e, "Completion failure cause");
                TurnReply {
                    text: self.config.persona.apology().to_string(),
                    outcome: TurnOutcome::Failed(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_client::CompletionError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use wayfarer_domain::{KeywordClassifier, Persona, Role, SystemPromptPolicy};

    // === Mock implementations ===

    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl LogCapture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs(level: tracing::Level) -> (LogCapture, tracing::subscriber::DefaultGuard) {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        (capture, tracing::subscriber::set_default(subscriber))
    }

    struct MockClient {
        reply: Result<String, CompletionError>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl MockClient {
        fn answering(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(error: CompletionError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(error),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionClient for MockClient {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
            self.requests.lock().unwrap().push(request.clone());
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        states: Mutex<Vec<SessionState>>,
    }

    impl SessionObserver for RecordingObserver {
        fn on_state_change(&self, state: SessionState) {
            self.states.lock().unwrap().push(state);
        }
    }

    // === Helpers ===

    fn use_case(client: Arc<MockClient>, policy: SystemPromptPolicy) -> HandleUserTurnUseCase {
        HandleUserTurnUseCase::new(
            client,
            Arc::new(KeywordClassifier::travel()),
            SessionConfig::new("deepseek/deepseek-chat").with_system_prompt_policy(policy),
        )
    }

    // === Tests ===

    #[tokio::test]
    async fn test_on_topic_turn_sends_history_and_appends_reply() {
        let client = MockClient::answering("Day 1: Asakusa...");
        let uc = use_case(client.clone(), SystemPromptPolicy::Exclude);
        let mut conv = uc.start_session();

        let reply = uc
            .execute(&mut conv, "Plan a 3-day trip to Tokyo under $500")
            .await;

        assert_eq!(reply.outcome, TurnOutcome::Answered);
        assert_eq!(reply.text, "Day 1: Asakusa...");

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        let sent: Vec<(Role, &str)> = requests[0]
            .messages
            .iter()
            .map(|t| (t.role(), t.content()))
            .collect();
        assert_eq!(
            sent,
            vec![
                (Role::Assistant, Persona::default().greeting()),
                (Role::User, "Plan a 3-day trip to Tokyo under $500"),
            ]
        );
        assert_eq!(requests[0].model, "deepseek/deepseek-chat");

        assert_eq!(conv.visible_turns().len(), 3);
        assert_eq!(conv.last().unwrap().role(), Role::Assistant);
        assert_eq!(conv.last().unwrap().content(), "Day 1: Asakusa...");
    }

    #[tokio::test]
    async fn test_default_policy_sends_persona_first() {
        let client = MockClient::answering("ok");
        let uc = use_case(client.clone(), SystemPromptPolicy::default());
        let mut conv = uc.start_session();

        uc.execute(&mut conv, "Best hotel in Rome?").await;

        let request = &client.requests()[0];
        assert!(request.includes_system_prompt());
        assert_eq!(
            request.messages[0].content(),
            Persona::default().system_prompt()
        );
        assert_eq!(request.messages.len(), 3);
    }

    #[tokio::test]
    async fn test_later_requests_carry_all_prior_dialogue() {
        let client = MockClient::answering("Sure.");
        let uc = use_case(client.clone(), SystemPromptPolicy::Exclude);
        let mut conv = uc.start_session();

        uc.execute(&mut conv, "Find a flight to Lima").await;
        uc.execute(&mut conv, "What's 2+2?").await;
        uc.execute(&mut conv, "And a hostel there?").await;

        let requests = client.requests();
        assert_eq!(requests.len(), 2);
        let last: Vec<&str> = requests[1].messages.iter().map(|t| t.content()).collect();
        assert_eq!(
            last,
            vec![
                Persona::default().greeting(),
                "Find a flight to Lima",
                "Sure.",
                "What's 2+2?",
                Persona::default().deflection(),
                "And a hostel there?",
            ]
        );
    }

    #[tokio::test]
    async fn test_off_topic_turn_is_deflected_without_network() {
        let client = MockClient::answering("should not be used");
        let uc = use_case(client.clone(), SystemPromptPolicy::Include);
        let mut conv = uc.start_session();

        let reply = uc.execute(&mut conv, "What's 2+2?").await;

        assert_eq!(reply.outcome, TurnOutcome::Deflected);
        assert_eq!(reply.text, Persona::default().deflection());
        assert!(client.requests().is_empty());
        assert_eq!(conv.last().unwrap().content(), Persona::default().deflection());
    }

    #[tokio::test]
    async fn test_repeated_off_topic_input_deflects_identically() {
        let client = MockClient::answering("unused");
        let uc = use_case(client.clone(), SystemPromptPolicy::Include);
        let mut conv = uc.start_session();

        let first = uc.execute(&mut conv, "What's 2+2?").await;
        let second = uc.execute(&mut conv, "What's 2+2?").await;

        assert_eq!(first, second);
        let assistant_turns = conv
            .turns()
            .iter()
            .filter(|t| t.role() == Role::Assistant)
            .count();
        // greeting + two deflections
        assert_eq!(assistant_turns, 3);
        assert_eq!(conv.visible_turns().len(), 5);
    }

    #[tokio::test]
    async fn test_failure_appends_apology_not_error_detail() {
        let client = MockClient::failing(CompletionError::Status {
            status: 401,
            body: "invalid api key".to_string(),
        });
        let uc = use_case(client.clone(), SystemPromptPolicy::Exclude);
        let mut conv = uc.start_session();

        let reply = uc.execute(&mut conv, "Visa rules for Japan?").await;

        let persona = Persona::default();
        let apology = persona.apology();
        assert_eq!(reply.text, apology);
        assert!(matches!(reply.outcome, TurnOutcome::Failed(ref cause) if cause.contains("401")));
        assert_eq!(conv.last().unwrap().content(), apology);
        assert!(conv.turns().iter().all(|t| !t.content().contains("invalid api key")));
    }

    #[tokio::test]
    async fn test_failure_cause_is_not_logged_at_warn() {
        let (logs, _guard) = capture_logs(tracing::Level::WARN);
        let client = MockClient::failing(CompletionError::Status {
            status: 401,
            body: "Invalid API key sk-or-secret-123".to_string(),
        });
        let uc = use_case(client, SystemPromptPolicy::Exclude);
        let mut conv = uc.start_session();

        uc.execute(&mut conv, "Hotels in Lisbon?").await;

        let output = logs.contents();
        assert!(output.contains("Completion failed"));
        assert!(!output.contains("sk-or-secret-123"));
    }

    #[tokio::test]
    async fn test_failure_cause_is_logged_at_debug() {
        let (logs, _guard) = capture_logs(tracing::Level::DEBUG);
        let client = MockClient::failing(CompletionError::Timeout);
        let uc = use_case(client, SystemPromptPolicy::Exclude);
        let mut conv = uc.start_session();

        uc.execute(&mut conv, "Hotels in Lisbon?").await;

        let output = logs.contents();
        assert!(output.contains("Completion failure cause"));
        assert!(output.contains(&CompletionError::Timeout.to_string()));
    }

    #[tokio::test]
    async fn test_observer_sees_awaiting_only_for_on_topic_turns() {
        let client = MockClient::answering("ok");
        let observer = Arc::new(RecordingObserver::default());
        let uc = use_case(client, SystemPromptPolicy::Include).with_observer(observer.clone());
        let mut conv = uc.start_session();

        uc.execute(&mut conv, "What's 2+2?").await;
        assert!(observer.states.lock().unwrap().is_empty());

        uc.execute(&mut conv, "Weather in Oslo in March?").await;
        assert_eq!(
            *observer.states.lock().unwrap(),
            vec![SessionState::AwaitingCompletion, SessionState::Idle]
        );
    }

    #[tokio::test]
    async fn test_observer_returns_to_idle_after_failure() {
        let client = MockClient::failing(CompletionError::Timeout);
        let observer = Arc::new(RecordingObserver::default());
        let uc = use_case(client, SystemPromptPolicy::Include).with_observer(observer.clone());
        let mut conv = uc.start_session();

        uc.execute(&mut conv, "Cruise options?").await;
        assert_eq!(
            observer.states.lock().unwrap().last(),
            Some(&SessionState::Idle)
        );
    }

    #[tokio::test]
    async fn test_custom_persona_texts_are_used() {
        let client = MockClient::answering("unused");
        let persona = Persona::travel()
            .with_greeting("Hi traveller!")
            .with_deflection("Travel only, please.");
        let uc = HandleUserTurnUseCase::new(
            client,
            Arc::new(KeywordClassifier::travel()),
            SessionConfig::new("m").with_persona(persona),
        );
        let mut conv = uc.start_session();

        assert_eq!(conv.visible_turns()[0].content(), "Hi traveller!");
        let reply = uc.execute(&mut conv, "2+2").await;
        assert_eq!(reply.text, "Travel only, please.");
    }
}
