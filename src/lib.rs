//! A clean slate, on demand.
//!
//! `tabula` fires a single POST at a local test server's reset endpoint
//! and reports the outcome: the status code if the server answered, the
//! transport error if it did not. Nothing is retried and nothing is
//! persisted; the actual database wipe belongs to the server behind
//! the endpoint.

pub mod consts;
pub mod dispatch;
pub mod report;
pub mod trigger;
