//! Shared types and pure logic for the employee profile form.
//!
//! Nothing in here touches the UI or the network, so the client and any
//! future backend can agree on field names and validation rules.

pub mod error;
pub mod models;
pub mod payload;
pub mod picture;
pub mod validation;

pub use error::*;
pub use models::*;
pub use payload::*;
pub use picture::*;
pub use validation::*;
