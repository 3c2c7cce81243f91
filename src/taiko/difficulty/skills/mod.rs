use self::{color::Color, rhythm::Rhythm, stamina::Stamina};

use super::config::StarRatingConfig;

pub mod color;
pub mod rhythm;
pub mod stamina;

#[derive(Clone, Debug)]
pub struct TaikoSkills {
    pub rhythm: Rhythm,
    pub color: Color,
    pub stamina: Stamina,
    pub single_color_stamina: Stamina,
}

impl TaikoSkills {
    pub fn new(config: &StarRatingConfig) -> Self {
        Self {
            rhythm: Rhythm::new(config),
            color: Color::new(config),
            stamina: Stamina::new(config, false),
            single_color_stamina: Stamina::new(config, true),
        }
    }
}
