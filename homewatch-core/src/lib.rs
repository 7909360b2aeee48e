//! Homewatch Core
//!
//! Domain types and pure logic for the homework status bot.
//!
//! This crate contains:
//! - Domain types: homework records and their review statuses
//! - Response validation: shape checks for raw grading API replies
//! - Message formatting: status-to-notification-text mapping
//!
//! No I/O happens here; everything is synchronous and side-effect free.

pub mod error;
pub mod homework;
pub mod response;

pub use error::CheckError;
pub use homework::{HomeworkRecord, HomeworkStatus, status_message};
pub use response::check_response;
