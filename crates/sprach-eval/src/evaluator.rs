//! Orchestration of one evaluation call.

use sprach_config::EvaluatorConfig;
use sprach_core::{AnnotatedSentence, Annotator, Dictionary, EvaluationOutcome, GrammarFinding};

use crate::checkers::{
    capitalization, case_agreement, coverage, extra_words, main_clause, near_miss, perfekt,
    spelling, subordinate,
};
use crate::error::{EvalError, SentenceRole};
use crate::resolver;

/// Grades learner sentences against target sentences.
///
/// The annotator and dictionary are injected by the caller, which owns their
/// lifetime; wrap the evaluator in an `Arc` to share it across threads.
#[derive(Debug)]
pub struct Evaluator<A, D> {
    annotator: A,
    dictionary: D,
    config: EvaluatorConfig,
}

impl<A: Annotator, D: Dictionary> Evaluator<A, D> {
    pub const fn new(annotator: A, dictionary: D, config: EvaluatorConfig) -> Self {
        Self {
            annotator,
            dictionary,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Annotate both sentences and grade the user's answer.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::Annotation` when either sentence cannot be
    /// annotated. Every other path yields an outcome.
    pub fn evaluate(&self, user: &str, target: &str) -> Result<EvaluationOutcome, EvalError> {
        let normalized = normalize_text(user);
        let user_sentence = self
            .annotator
            .annotate(&normalized)
            .map_err(|source| EvalError::Annotation {
                which: SentenceRole::User,
                source,
            })?;
        let target_sentence =
            self.annotator
                .annotate(target)
                .map_err(|source| EvalError::Annotation {
                    which: SentenceRole::Target,
                    source,
                })?;
        Ok(self.grade(&user_sentence, &target_sentence, target))
    }

    /// Grade an already annotated pair. `correct_sentence` is echoed back.
    #[must_use]
    pub fn grade(
        &self,
        user: &AnnotatedSentence,
        target: &AnnotatedSentence,
        correct_sentence: &str,
    ) -> EvaluationOutcome {
        let tokens = user.surface_forms();

        let spelling = spelling::check(
            user,
            target,
            &self.dictionary,
            self.config.verb_similarity_threshold,
        );
        if spelling.critical {
            tracing::debug!(
                findings = spelling.findings.len(),
                "critical misspelling; skipping grammar checks"
            );
            return EvaluationOutcome::rejected(correct_sentence, tokens, spelling.findings);
        }

        if let Some(failure) = coverage::assess(user, target, &self.config) {
            tracing::debug!(%failure, "answer rejected by coverage gate");
            return EvaluationOutcome::rejected(
                correct_sentence,
                tokens,
                vec![coverage::invalid_attempt()],
            );
        }

        let mut findings: Vec<GrammarFinding> = spelling.findings;
        findings.extend(main_clause::check(user));
        findings.extend(subordinate::check(user));
        findings.extend(capitalization::check(user));
        findings.extend(perfekt::check(user));
        findings.extend(case_agreement::check(user, target));

        let claimed = extra_words::claimed_spans(&findings);
        findings.extend(extra_words::check(user, target, &claimed));
        findings.extend(near_miss::check(
            user,
            target,
            self.config.near_miss_max_mismatch,
        ));

        let raw = findings.len();
        let resolved = resolver::resolve(findings);
        tracing::debug!(raw, kept = resolved.len(), "findings resolved");
        EvaluationOutcome::graded(correct_sentence, tokens, resolved)
    }
}

/// Trim the text and close it with a full stop unless it already ends in
/// sentence punctuation.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}
