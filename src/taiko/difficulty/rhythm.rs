/// Ratio between two consecutive delta times together with the difficulty
/// of playing it.
#[derive(Debug)]
pub struct HitObjectRhythm {
    pub id: u8,
    pub ratio: f64,
    pub difficulty: f64,
}

impl PartialEq for HitObjectRhythm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HitObjectRhythm {}

#[rustfmt::skip]
pub static COMMON_RHYTHMS: [HitObjectRhythm; 9] = [
    HitObjectRhythm { id: 0, ratio: 1.0, difficulty: 0.0 },
    HitObjectRhythm { id: 1, ratio: 2.0 / 1.0, difficulty: 0.3 },
    HitObjectRhythm { id: 2, ratio: 1.0 / 2.0, difficulty: 0.5 },
    HitObjectRhythm { id: 3, ratio: 3.0 / 1.0, difficulty: 0.3 },
    HitObjectRhythm { id: 4, ratio: 1.0 / 3.0, difficulty: 0.35 },
    HitObjectRhythm { id: 5, ratio: 3.0 / 2.0, difficulty: 0.6 },
    HitObjectRhythm { id: 6, ratio: 2.0 / 3.0, difficulty: 0.4 },
    HitObjectRhythm { id: 7, ratio: 5.0 / 4.0, difficulty: 0.5 },
    HitObjectRhythm { id: 8, ratio: 4.0 / 5.0, difficulty: 0.7 },
];

/// The common rhythm closest to `delta_time / prev_delta_time`.
///
/// Ties and undefined ratios resolve to the first candidate, i.e. an
/// unchanged rhythm.
pub fn closest_rhythm(delta_time: f64, prev_delta_time: f64) -> &'static HitObjectRhythm {
    let ratio = delta_time / prev_delta_time;

    let mut closest = &COMMON_RHYTHMS[0];
    let mut closest_dist = (closest.ratio - ratio).abs();

    for rhythm in COMMON_RHYTHMS[1..].iter() {
        let dist = (rhythm.ratio - ratio).abs();

        if dist < closest_dist {
            closest = rhythm;
            closest_dist = dist;
        }
    }

    closest
}
