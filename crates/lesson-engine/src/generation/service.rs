use std::fmt;

use uuid::Uuid;

use super::{
    backend::TextGenerator,
    error::GenerationError,
    fallback::fallback_lesson,
    prompt::{GenerationRequest, build_prompt},
};

/// Generation credential. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a credential; blank values are treated as absent.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        (!key.is_empty()).then_some(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Model settings forwarded to the generator backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.9,
            max_tokens: 1500,
        }
    }
}

/// Why the fallback lesson was used instead of generated text.
#[derive(Debug)]
pub enum FallbackReason {
    MissingCredential,
    BackendFailed(GenerationError),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => f.write_str("no generation credential configured"),
            Self::BackendFailed(e) => write!(f, "{e}"),
        }
    }
}

/// Lesson text plus where it came from.
#[derive(Debug)]
pub enum GeneratedContent {
    Generated(String),
    Fallback { text: String, reason: FallbackReason },
}

impl GeneratedContent {
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) | Self::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) | Self::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Issues generation requests with an injected credential and backend.
pub struct ContentService<G> {
    generator: Option<G>,
    credential: Option<ApiKey>,
    options: GenerationOptions,
}

impl<G: TextGenerator> ContentService<G> {
    pub fn new(generator: Option<G>, credential: Option<ApiKey>, options: GenerationOptions) -> Self {
        Self {
            generator,
            credential,
            options,
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Produces lesson text for `request`, substituting the fallback lesson
    /// when the credential is missing or the backend fails.
    pub async fn generate(&self, request: &GenerationRequest) -> GeneratedContent {
        let Some(credential) = &self.credential else {
            log::warn!("Generation credential is not configured; using fallback lesson");
            return Self::fallback(request, FallbackReason::MissingCredential);
        };
        let Some(generator) = &self.generator else {
            log::warn!("No generator backend configured; using fallback lesson");
            return Self::fallback(
                request,
                FallbackReason::BackendFailed(GenerationError::NoBackend),
            );
        };

        let session_id = Uuid::new_v4().simple().to_string();
        let prompt = build_prompt(request, &session_id);
        log::debug!(
            "requesting lesson on {:?} with model {} (session {session_id})",
            request.topic(),
            self.options.model
        );

        match generator.generate(credential, &prompt, &self.options).await {
            Ok(text) => GeneratedContent::Generated(text),
            Err(e) => {
                log::error!("Error generating lesson content: {e}");
                Self::fallback(request, FallbackReason::BackendFailed(e))
            }
        }
    }

    fn fallback(request: &GenerationRequest, reason: FallbackReason) -> GeneratedContent {
        GeneratedContent::Fallback {
            text: fallback_lesson(request),
            reason,
        }
    }
}
