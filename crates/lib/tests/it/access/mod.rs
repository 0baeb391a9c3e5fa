//! Accessor integration tests
//!
//! Tests key resolution, path handling and the single-level and deep
//! get/put/delete operations over mixed shapes.

mod accessor_tests;
mod property_tests;
mod scenario_tests;
