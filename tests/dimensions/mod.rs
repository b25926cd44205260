//! Integration tests for dimensions

mod dimensions_tests;
