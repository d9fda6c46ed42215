//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: EntityKind, TowerPathName, Error, and normal forms.

mod kinds;
