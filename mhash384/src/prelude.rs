//! Re-exports the most commonly used items of this crate.
//!
//! The intended usage is a wildcard import:
//!
//! ```
//! use mhash384::prelude::*;
//!
//! let _digest = MHash384::hash("some input");
//! ```

pub use crate::error::HashingError;
pub use crate::error::TryFromDigestError;
pub use crate::error::TryFromHexDigestError;
pub use crate::hasher::Digest;
pub use crate::hasher::MHash384;
pub use crate::self_test::SelfTestOutcome;
pub use crate::self_test::self_test;
pub use crate::self_test::self_test_with_cancel;
