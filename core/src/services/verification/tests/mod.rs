//! Tests for the verification registry
