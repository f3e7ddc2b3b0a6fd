//! Trait definitions for the storyboard generation pipeline.
//!
//! The pipeline never talks to an upstream API directly; it is handed a
//! [`TextGenerator`] and treats it as a capability.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

#[cfg(any(test, feature = "testing"))]
mod mock;

pub use traits::TextGenerator;

#[cfg(any(test, feature = "testing"))]
pub use mock::{MockCall, MockGenerator, MockReply};
