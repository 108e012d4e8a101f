pub mod course;
pub mod overrides;
pub mod round;
pub mod stats;

pub use course::{Course, Hole, Tee, TeeKey};
pub use overrides::{OverrideDay, OverrideExtraRound, extra_rounds};
pub use round::{RawRoundRecord, RoundDocument};
pub use stats::BuildStats;
