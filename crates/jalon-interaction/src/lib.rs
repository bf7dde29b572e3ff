//! Assistant session management for the Jalon dashboard.
//!
//! An [`AssistantSession`] owns one conversation: an append-only
//! transcript seeded with a greeting, and a single in-flight-request flag
//! that guards against concurrent submissions. The outbound call is the
//! only suspension point; every failure is converted into a transcript
//! message so the session always returns to idle.

pub mod agent;
pub mod gemini_api_agent;
pub mod prompt;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use jalon_core::Result;
use jalon_core::credentials::CredentialChain;
use jalon_core::error::JalonError;
use jalon_core::project::PROJECT;
use jalon_core::session::{ConversationMessage, Transcript};

pub use agent::{GenerativeAgent, Turn, TurnRole};
pub use gemini_api_agent::GeminiApiAgent;

/// The assistant greeting seeding every new transcript.
pub const GREETING: &str = "Bonjour ! Je suis l'assistant du projet **Math Conquest**. \
     Nous partons de zéro sur ce développement. Comment puis-je vous aider \
     (Architecture, Planning, Tâches) ?";

/// Number of transcript entries sent as context with each request. The
/// outbound turn list is this window plus the newly submitted message.
const TRAILING_WINDOW: usize = 10;

/// Outcome of a [`AssistantSession::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank, or a request was already in flight. Nothing
    /// changed and no call was made.
    Ignored,
    /// The service answered; the reply was appended to the transcript.
    Replied { text: String },
    /// The call failed; a human-readable message was appended instead.
    Recovered { text: String },
}

/// One assistant conversation.
///
/// The session is a cloneable handle over shared state, so a UI can keep
/// one clone for rendering and another for input handling. `submit` is
/// the only mutation surface; the transcript only ever grows.
pub struct AssistantSession<A: GenerativeAgent> {
    session_id: String,
    agent: Arc<A>,
    transcript: Arc<RwLock<Transcript>>,
    awaiting_response: Arc<AtomicBool>,
}

impl<A: GenerativeAgent> Clone for AssistantSession<A> {
    fn clone(&self) -> Self {
        Self {
            session_id: self.session_id.clone(),
            agent: Arc::clone(&self.agent),
            transcript: Arc::clone(&self.transcript),
            awaiting_response: Arc::clone(&self.awaiting_response),
        }
    }
}

impl<A: GenerativeAgent> AssistantSession<A> {
    /// Creates a new session around the given agent, seeded with the
    /// project greeting.
    pub fn new(agent: A) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            agent: Arc::new(agent),
            transcript: Arc::new(RwLock::new(Transcript::new(GREETING))),
            awaiting_response: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the session ID.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Snapshot of the transcript, oldest message first.
    pub async fn transcript(&self) -> Vec<ConversationMessage> {
        self.transcript.read().await.messages().to_vec()
    }

    /// True exactly while a request is outstanding.
    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response.load(Ordering::SeqCst)
    }

    /// Submits a user message and waits for the reply.
    ///
    /// Blank input, or a submit while a request is already in flight, is
    /// ignored without side effects. Otherwise the user message is
    /// appended, exactly one outbound call is made with the trailing
    /// transcript window as context, and the reply (or a failure
    /// message) is appended. The session is idle again when this
    /// returns, whatever the outcome.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        if self
            .awaiting_response
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!(session_id = %self.session_id, "submit ignored: request in flight");
            return SubmitOutcome::Ignored;
        }

        // The context window is captured before the new message is
        // appended; the new message is always the final turn.
        let turns = {
            let mut transcript = self.transcript.write().await;
            let mut turns: Vec<Turn> = transcript
                .trailing(TRAILING_WINDOW)
                .iter()
                .map(Turn::from)
                .collect();
            turns.push(Turn::user(text));
            transcript.push_user(text);
            turns
        };

        let outcome = match self.agent.generate(&turns).await {
            Ok(reply) => {
                self.transcript.write().await.push_assistant(&reply);
                SubmitOutcome::Replied { text: reply }
            }
            Err(err) => {
                log::warn!("assistant request failed: {err}");
                let message = failure_message(&err);
                self.transcript.write().await.push_assistant(&message);
                SubmitOutcome::Recovered { text: message }
            }
        };

        self.awaiting_response.store(false, Ordering::SeqCst);
        outcome
    }
}

/// Builds the dashboard's default session: a Gemini agent carrying the
/// project snapshot instruction, resolving its key from the default
/// credential sources.
///
/// A missing key does not fail construction; it surfaces as a
/// configuration message on the first `submit`.
pub fn new_project_session() -> Result<AssistantSession<GeminiApiAgent>> {
    let instruction = prompt::system_instruction(&PROJECT)?;
    let agent =
        GeminiApiAgent::new(CredentialChain::default_sources()).with_system_instruction(instruction);
    Ok(AssistantSession::new(agent))
}

/// Maps a failure to the message shown in the conversation.
fn failure_message(err: &JalonError) -> String {
    match err {
        JalonError::MissingCredential { sources } => format!(
            "⚠️ **Erreur de Configuration**\n\n\
             L'application ne trouve pas de clé API.\n\n\
             Sources vérifiées (dans l'ordre) : {}.\n\n\
             **Solution :**\n\
             1. Définissez la variable d'environnement `GEMINI_API_KEY`, ou\n\
             2. Renseignez `gemini.api_key` dans `~/.config/jalon/secret.json`.",
            sources.join(", ")
        ),
        JalonError::InvalidCredential(_) => {
            "Erreur de clé API : la clé fournie semble invalide.".to_string()
        }
        _ => "Une erreur technique est survenue.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    use jalon_core::session::MessageRole;

    /// Test double: counts calls, records the last turn list, optionally
    /// blocks until released, then returns a scripted result.
    struct ScriptedAgent {
        calls: Arc<AtomicUsize>,
        last_turns: Arc<Mutex<Vec<Turn>>>,
        gate: Option<Arc<Notify>>,
        reply: Result<String>,
    }

    impl ScriptedAgent {
        fn replying(reply: Result<String>) -> (Self, Arc<AtomicUsize>, Arc<Mutex<Vec<Turn>>>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let last_turns = Arc::new(Mutex::new(Vec::new()));
            let agent = Self {
                calls: calls.clone(),
                last_turns: last_turns.clone(),
                gate: None,
                reply,
            };
            (agent, calls, last_turns)
        }
    }

    #[async_trait::async_trait]
    impl GenerativeAgent for ScriptedAgent {
        async fn generate(&self, turns: &[Turn]) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_turns.lock().unwrap() = turns.to_vec();
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_transcript_starts_with_greeting() {
        let (agent, _, _) = ScriptedAgent::replying(Ok("réponse".to_string()));
        let session = AssistantSession::new(agent);

        let transcript = session.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, MessageRole::Assistant);
        assert_eq!(transcript[0].content, GREETING);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let (agent, calls, _) = ScriptedAgent::replying(Ok("réponse".to_string()));
        let session = AssistantSession::new(agent);

        assert_eq!(session.submit("   ").await, SubmitOutcome::Ignored);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.transcript().await.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_appends_user_and_reply() {
        let (agent, calls, _) = ScriptedAgent::replying(Ok("Voici le **planning**.".to_string()));
        let session = AssistantSession::new(agent);

        let outcome = session.submit("Quel est le planning ?").await;
        assert_eq!(
            outcome,
            SubmitOutcome::Replied {
                text: "Voici le **planning**.".to_string()
            }
        );

        let transcript = session.transcript().await;
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].role, MessageRole::User);
        assert_eq!(transcript[1].content, "Quel est le planning ?");
        assert_eq!(transcript[2].role, MessageRole::Assistant);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test]
    async fn test_no_concurrent_requests_per_session() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = Arc::new(Notify::new());
        let agent = ScriptedAgent {
            calls: calls.clone(),
            last_turns: Arc::new(Mutex::new(Vec::new())),
            gate: Some(gate.clone()),
            reply: Ok("réponse".to_string()),
        };
        let session = AssistantSession::new(agent);
        let background = session.clone();

        let first = tokio::spawn(async move { background.submit("premier message").await });

        while calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(session.is_awaiting_response());

        // A second submit while the first is outstanding is a no-op.
        assert_eq!(
            session.submit("deuxième message").await,
            SubmitOutcome::Ignored
        );

        gate.notify_one();
        let outcome = first.await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Replied {
                text: "réponse".to_string()
            }
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // Greeting + first user message + reply; the ignored submit left
        // no trace.
        assert_eq!(session.transcript().await.len(), 3);
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test]
    async fn test_outbound_turns_are_bounded() {
        let (agent, _, last_turns) = ScriptedAgent::replying(Ok("réponse".to_string()));
        let session = AssistantSession::new(agent);

        for i in 1..=15 {
            let outcome = session.submit(&format!("question {i}")).await;
            assert!(matches!(outcome, SubmitOutcome::Replied { .. }));
        }

        let turns = last_turns.lock().unwrap().clone();
        assert_eq!(turns.len(), 11);
        assert_eq!(turns.last().unwrap().text, "question 15");
        assert_eq!(turns.last().unwrap().role, TurnRole::User);
        // Window starts mid-conversation: older entries were dropped.
        assert_eq!(turns[0].text, "question 10");
        assert_eq!(turns[1].role, TurnRole::Model);
    }

    #[tokio::test]
    async fn test_missing_credential_surfaces_configuration_message() {
        let (agent, calls, _) = ScriptedAgent::replying(Err(JalonError::MissingCredential {
            sources: vec!["GEMINI_API_KEY".to_string(), "API_KEY".to_string()],
        }));
        let session = AssistantSession::new(agent);

        let outcome = session.submit("bonjour").await;
        let SubmitOutcome::Recovered { text } = outcome else {
            panic!("expected Recovered outcome");
        };
        assert!(text.contains("Erreur de Configuration"));
        assert!(text.contains("GEMINI_API_KEY, API_KEY"));

        let transcript = session.transcript().await;
        assert_eq!(transcript.last().unwrap().role, MessageRole::Assistant);
        assert!(!session.is_awaiting_response());

        // The failed call left no lock behind: a new submit issues a
        // fresh, independent request.
        session.submit("encore").await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_rejected_key_surfaces_dedicated_message() {
        let (agent, _, _) = ScriptedAgent::replying(Err(JalonError::invalid_credential(
            "API key not valid",
        )));
        let session = AssistantSession::new(agent);

        let SubmitOutcome::Recovered { text } = session.submit("bonjour").await else {
            panic!("expected Recovered outcome");
        };
        assert_eq!(text, "Erreur de clé API : la clé fournie semble invalide.");
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_generic_message() {
        let (agent, _, _) = ScriptedAgent::replying(Err(JalonError::transport(
            Some(503),
            "service unavailable",
        )));
        let session = AssistantSession::new(agent);

        let SubmitOutcome::Recovered { text } = session.submit("bonjour").await else {
            panic!("expected Recovered outcome");
        };
        assert_eq!(text, "Une erreur technique est survenue.");
    }
}
