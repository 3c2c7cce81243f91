pub trait IDifficultyObject {
    type DifficultyObjects: IDifficultyObjects + ?Sized;

    fn idx(&self) -> usize;

    fn previous<'a>(
        &self,
        backwards_idx: usize,
        diff_objects: &'a Self::DifficultyObjects,
    ) -> Option<&'a <Self::DifficultyObjects as IDifficultyObjects>::DifficultyObject> {
        self.idx()
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| diff_objects.get(idx))
    }
}

pub trait IDifficultyObjects {
    type DifficultyObject: HasStartTime;

    fn get(&self, idx: usize) -> Option<&Self::DifficultyObject>;
}

pub trait HasStartTime {
    fn start_time(&self) -> f64;
}

impl<T: HasStartTime> IDifficultyObjects for [T] {
    type DifficultyObject = T;

    fn get(&self, idx: usize) -> Option<&Self::DifficultyObject> {
        self.get(idx)
    }
}

/// Clock-rate adjusted time since the previous object.
pub trait HasDeltaTime {
    fn delta_time(&self) -> f64;
}
