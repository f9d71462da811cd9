//! Data types for the docdiff library.

pub mod document;
pub mod fingerprint;

pub use document::{Document, IngestOutcome, NewDocument};
pub use fingerprint::{ContentFingerprint, ParseFingerprintError};
