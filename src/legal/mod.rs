//! Static legal reference data: the canned answer table and the topic catalog.

pub mod catalog;
pub mod responder;

pub use catalog::{
    LegalArea, WelcomeShortcut, DISCLAIMER, DISCLAIMER_TITLE, LEGAL_AREAS, WELCOME_SHORTCUTS,
};
pub use responder::{compute_response, ResponseRule, Responder, Topic, FALLBACK_RESPONSE};
