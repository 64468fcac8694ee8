//! The scoring engine: pure, deterministic evaluators for internship/job
//! offers and resume text, plus the credit-gated view layer on top.

pub mod extract;
pub mod handlers;
pub mod offer;
pub mod preview;
pub mod resume;
pub mod text;
