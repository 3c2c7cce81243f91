pub use self::difficulty::{Difficulty, DifficultyError, ModsDependent};

pub(crate) mod difficulty;
