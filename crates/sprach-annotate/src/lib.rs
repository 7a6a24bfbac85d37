//! # sprach-annotate
//!
//! [`Annotator`] backed by an HTTP annotation service.
//!
//! The service receives `POST {"text": "..."}` and answers with the JSON form
//! of an [`AnnotatedSentence`]: tokens carrying POS, STTS tag, dependency
//! label, FEATS morphology, head, children and subtree, plus optional
//! sentence spans. The response is validated against the model invariants
//! before it reaches the evaluator.

use std::time::Duration;

use serde::Serialize;
use sprach_config::AnnotatorConfig;
use sprach_core::{AnnotatedSentence, AnnotationError, Annotator};

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

/// Blocking HTTP client for the annotation service.
#[derive(Debug, Clone)]
pub struct HttpAnnotator {
    http: reqwest::blocking::Client,
    url: String,
}

impl HttpAnnotator {
    /// # Errors
    ///
    /// Returns `AnnotationError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &AnnotatorConfig) -> Result<Self, AnnotationError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("sprach/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnnotationError::Transport(format!("failed to build client: {e}")))?;
        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Annotator for HttpAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotationError> {
        let response = self
            .http
            .post(&self.url)
            .json(&AnnotateRequest { text })
            .send()
            .map_err(|e| AnnotationError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AnnotationError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %self.url, "annotation request failed");
            return Err(AnnotationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let sentence: AnnotatedSentence =
            serde_json::from_str(&body).map_err(|e| AnnotationError::Decode(e.to_string()))?;
        tracing::debug!(tokens = sentence.len(), "annotated sentence");
        Ok(sentence)
    }
}
