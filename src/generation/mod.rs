//! Generation domain module - the text synthesis behind the template helpers
//!
//! Everything here is pure: given its arguments (and the read-only
//! [`HelperConfig`](crate::core::HelperConfig)) a helper always produces the
//! same text. The only collaborator is the injected [`TypeRenderer`] used by
//! the composite helpers.

pub mod branches;
pub mod composer;
pub mod context;
pub mod enums;
pub mod errors;
pub mod predicates;
pub mod sanitizers;
pub mod signature;
pub mod traits;
pub mod types;
pub mod utils;

pub use branches::*;
pub use composer::*;
pub use context::*;
pub use enums::*;
pub use errors::*;
pub use predicates::*;
pub use sanitizers::{LINE_ENDING, escape_comment, escape_description};
pub use signature::*;
pub use traits::*;
pub use types::*;
pub use utils::{to_camel_case, to_lower_case};
