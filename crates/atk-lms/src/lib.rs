//! # atk-lms
//!
//! Synchronization of assignment packages with a learning-management system.
//!
//! - [`LmsApi`]: the four import endpoints the toolkit relies on
//! - [`LmsClient`]: reqwest implementation with bearer auth and a request timeout
//! - [`Synchronizer`]: duplicate check, assignment creation, resource upload,
//!   and batch aggregation on top of any [`LmsApi`]

mod client;
mod error;
mod http;
mod sync;

pub use client::{CreatedAssignment, LmsApi, LmsClient, ResourceUpload};
pub use error::LmsError;
pub use sync::{SyncOptions, Synchronizer};
