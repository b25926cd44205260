//! Integration tests for the readers

mod paramdb_tests;

mod structure_tests;
