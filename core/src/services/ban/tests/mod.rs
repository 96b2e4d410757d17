//! Tests for the ban policy
