//! Unit tests for pull request values.
