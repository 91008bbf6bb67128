// Sub-modules organized by functional domain
pub mod commit;
pub mod environment;
pub mod organization;
pub mod release;
pub mod stats;

pub use commit::*;
pub use environment::*;
pub use organization::*;
pub use release::*;
pub use stats::*;
