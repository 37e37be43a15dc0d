//! Core library for numclass
//!
//! This crate implements the **Functional Core** of the numclass application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`numclass_core`** (this crate): Pure transformation functions with zero I/O
//! - **`numclass`**: HTTP server, CLI, and the outbound fun fact call (the Imperative Shell)
//!
//! Everything here is deterministic: the same input always produces the same
//! output, so the whole crate is tested with plain values and no mocking.
//!
//! # Module Organization
//!
//! - [`validate`]: Parsing the raw `number` query parameter into an integer
//! - [`math`]: Number predicates (prime, perfect, Armstrong) and digit sum
//! - [`classify`]: Assembling the ordered response payloads
//! - [`fact`]: Building fun fact URLs and extracting trivia from response bodies
//!
//! # Example Usage
//!
//! ```rust
//! use numclass_core::{classify::classify, validate::parse_number};
//!
//! let n = parse_number(Some("371")).unwrap();
//! let result = classify(n, "371 is an Armstrong number.".to_string());
//!
//! assert_eq!(result.properties, vec!["armstrong", "odd"]);
//! assert_eq!(result.digit_sum, 11);
//! ```

pub mod classify;
pub mod fact;
pub mod math;
pub mod validate;
