//! Request routing. Pure with respect to the transport: takes method, URL and
//! body, returns an [`ApiResponse`].

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use sprach_core::entities::{FlashcardCreate, FlashcardUpdate};
use sprach_core::responses::{EvaluateRequest, EvaluationResponse, HealthResponse};
use tiny_http::Method;

use super::AppState;
use super::response::ApiResponse;

pub fn route(state: &AppState, method: &Method, url: &str, body: &str) -> ApiResponse {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match (method, segments.as_slice()) {
        (Method::Options, _) => ApiResponse::no_content(),
        (Method::Get, ["health"]) => ApiResponse::ok(&HealthResponse::ok()),
        (Method::Get, ["cards"]) => ApiResponse::ok(&state.deck.count()),
        (Method::Get, ["flashcards"]) => match query_param(query, "first_n") {
            None => ApiResponse::ok(&state.deck.list(None)),
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) => ApiResponse::ok(&state.deck.list(Some(n))),
                Err(_) => ApiResponse::unprocessable("first_n must be a non-negative integer"),
            },
        },
        (Method::Get, ["flashcards", id]) => with_id(id, |id| {
            state
                .deck
                .get(id)
                .map_or_else(ApiResponse::not_found, |card| ApiResponse::ok(&card))
        }),
        (Method::Post, ["flashcards"]) => with_body::<FlashcardCreate>(body, |card| {
            if let Err(error) = card.validate() {
                return ApiResponse::unprocessable(error.to_string());
            }
            ApiResponse::ok(&state.deck.create(card))
        }),
        (Method::Post, ["flashcards", id]) => with_id(id, |id| {
            with_body::<FlashcardUpdate>(body, |update| {
                if let Err(error) = update.validate() {
                    return ApiResponse::unprocessable(error.to_string());
                }
                state
                    .deck
                    .update(id, update)
                    .map_or_else(ApiResponse::not_found, |card| ApiResponse::ok(&card))
            })
        }),
        (Method::Delete, ["flashcards", id]) => with_id(id, |id| {
            state
                .deck
                .delete(id)
                .map_or_else(ApiResponse::not_found, |card| ApiResponse::ok(&card))
        }),
        (Method::Post, ["evaluate"]) => with_body::<EvaluateRequest>(body, |request| evaluate(state, &request)),
        (_, ["health" | "cards" | "flashcards" | "evaluate"])
        | (_, ["flashcards", _]) => ApiResponse::error(405, "Method Not Allowed"),
        _ => ApiResponse::error(404, "Not Found"),
    }
}

fn evaluate(state: &AppState, request: &EvaluateRequest) -> ApiResponse {
    if let Err(error) = request.validate() {
        return ApiResponse::unprocessable(error.to_string());
    }
    let Some(card) = state.deck.get(request.flashcard_id) else {
        return ApiResponse::not_found();
    };
    match state
        .evaluator
        .evaluate(&request.user_german, &card.target_german)
    {
        Ok(outcome) => {
            tracing::debug!(
                flashcard_id = card.flashcard_id,
                meaning_conveyed = outcome.meaning_conveyed,
                findings = outcome.findings.len(),
                "evaluated answer"
            );
            ApiResponse::ok(&EvaluationResponse::from(outcome))
        }
        Err(error) => {
            tracing::error!(%error, flashcard_id = card.flashcard_id, "evaluation failed");
            ApiResponse::error(502, error.to_string())
        }
    }
}

fn with_id(raw: &str, handler: impl FnOnce(i64) -> ApiResponse) -> ApiResponse {
    raw.parse::<i64>().map_or_else(
        |_| ApiResponse::unprocessable(format!("flashcard_id must be an integer, got '{raw}'")),
        handler,
    )
}

fn with_body<T: DeserializeOwned>(body: &str, handler: impl FnOnce(T) -> ApiResponse) -> ApiResponse {
    serde_json::from_str::<T>(body).map_or_else(
        |error| ApiResponse::unprocessable(format!("invalid request body: {error}")),
        handler,
    )
}

/// Percent-decoded value of the first `name=value` pair.
fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value).map_or_else(|_| value.to_string(), Cow::into_owned)
        })
}
