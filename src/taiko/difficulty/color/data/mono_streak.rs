use crate::model::hit_object::HitType;

/// Consecutive difficulty objects of the same hit type.
#[derive(Debug)]
pub struct MonoStreak {
    pub hit_objects: Vec<usize>,
    pub hit_type: HitType,
    /// Index of the enclosing [`AlternatingMonoPattern`].
    ///
    /// [`AlternatingMonoPattern`]: super::alternating_mono_pattern::AlternatingMonoPattern
    pub parent: usize,
    /// Position within the parent.
    pub idx: usize,
}

impl MonoStreak {
    pub const fn new(hit_type: HitType) -> Self {
        Self {
            hit_objects: Vec::new(),
            hit_type,
            parent: 0,
            idx: 0,
        }
    }

    pub fn run_len(&self) -> usize {
        self.hit_objects.len()
    }

    pub fn first_hit_object(&self) -> Option<usize> {
        self.hit_objects.first().copied()
    }

    pub fn last_hit_object(&self) -> Option<usize> {
        self.hit_objects.last().copied()
    }
}
