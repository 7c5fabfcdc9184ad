//! trusty - Data model for the Trusty package intelligence API
//!
//! This library provides:
//! - The report schema (scores, provenance, typosquatting, package data)
//! - A timestamp codec tolerant of the two layouts the API emits
//! - Ecosystem identifiers and dependency snapshot diffing

pub mod cli;
pub mod domain;
pub mod error;
pub mod output;
pub mod report;
pub mod snapshot;
