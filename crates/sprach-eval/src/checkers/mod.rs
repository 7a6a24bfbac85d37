//! Independent grammar checkers.
//!
//! Every checker is a pure function of the annotated sentence pair (plus
//! thresholds) returning its findings. None depends on another's output
//! except the extra-word detector, which skips tokens already claimed.

pub mod capitalization;
pub mod case_agreement;
pub mod coverage;
pub mod extra_words;
pub mod main_clause;
pub mod near_miss;
pub mod perfekt;
pub mod spelling;
pub mod subordinate;

mod helpers;
