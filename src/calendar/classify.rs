use crate::model::IntensityTier;

pub const LOW_MIN: u32 = 1;
pub const MEDIUM_MIN: u32 = 5;
pub const HIGH_MIN: u32 = 10;
pub const MAX_MIN: u32 = 15;

pub fn classify(count: u32) -> IntensityTier {
    match count {
        0 => IntensityTier::None,
        c if c < MEDIUM_MIN => IntensityTier::Low,
        c if c < HIGH_MIN => IntensityTier::Medium,
        c if c < MAX_MIN => IntensityTier::High,
        _ => IntensityTier::Max,
    }
}
