//! # atk-core
//!
//! Core types and error types for the assignment toolkit.
//!
//! This crate provides the foundational types shared across all toolkit crates:
//! - The assignment package model (metadata, assignment body, resources, dependencies)
//! - Typed question payloads keyed by assignment kind
//! - Enums for difficulty and import status
//! - Validation and import result records
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

/// Tag identifying this tool as the origin of imported assignments.
pub const IMPORTED_FROM: &str = "assignment-toolkit";
