#![allow(clippy::must_use_candidate)]

pub mod envelope;
pub mod failure;
pub mod rules;

pub use envelope::ResultEnvelope;
pub use failure::{ApiFailure, FailureKind, FieldViolation};
pub use rules::{Rule, classify, render};
