//! Integration tests for Layer 1: Storage
//!
//! Tests for rooms, inventory, world snapshots, and the campus map.

mod world;
