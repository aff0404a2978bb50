pub mod role;
pub mod stitched;

pub use role::{GeneratedBullet, RoleBullets};
pub use stitched::{DeduplicationResult, DuplicatePair, StitchedCV, StitchedRole};
