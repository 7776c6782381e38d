//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, MonsterId, Error, and frozen collections.

mod collections;
