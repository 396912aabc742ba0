//! Unit tests for issue reconciliation.

mod failure_tests;
