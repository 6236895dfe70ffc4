//! QA Relay - Question/answer relay service
//!
//! This crate accepts questions over HTTP, forwards them to a managed
//! search/summarization service, and records each question/answer pair
//! to an analytics warehouse.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
