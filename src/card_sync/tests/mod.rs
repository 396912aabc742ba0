//! Unit tests for card reconciliation.
