pub use self::{
    attributes::TaikoDifficultyAttributes,
    difficulty::config::{SkillConstants, StarRatingConfig},
    strains::TaikoStrains,
};

mod attributes;
pub(crate) mod difficulty;
pub(crate) mod strains;
