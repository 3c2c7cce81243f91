/// Hit events and their channel.
pub mod hit_object;

/// Wrapper for the mods that affect the star rating.
pub mod mods;
