//! Consultation façade: classify intake, derive a match request and recommend pigments.

pub mod domain;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ConsultationOutcome, ConsultationRequest};
pub use router::consultation_router;
pub use service::ConsultationService;
