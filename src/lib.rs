//! # Connect Four AI
//!
//! A Connect Four game-playing engine built around depth-limited adversarial
//! search. Two search strategies are provided: alpha-beta minimax against an
//! adversarial opponent, and expectimax against a uniformly random one. Both
//! run over a gravity-aware board and share a kernel-based positional
//! heuristic for depth cutoffs.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player identities, win detection,
//!   game state machine
//! - [`ai`] — Agent trait and player strategies: minimax, expectimax,
//!   random, human
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
