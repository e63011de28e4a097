//! Integration tests for full system behavior
