//! Integration tests for Layer 0: Foundation
//!
//! Tests for error kinds, player-facing messages, and weights.

mod errors;
mod weights;
