use crate::taiko::difficulty::object::{TaikoDifficultyObject, TaikoDifficultyObjects};

pub struct StaminaEvaluator;

impl StaminaEvaluator {
    pub fn evaluate_diff_of(curr: &TaikoDifficultyObject, objects: &TaikoDifficultyObjects) -> f64 {
        // * Find the previous hit object hit by the current finger, which is n notes prior, n being the number of
        // * available fingers.
        let Some(key_prev) =
            objects.previous_mono(curr, Self::available_fingers_for(curr, objects) - 1)
        else {
            return 0.0;
        };

        // * Add a base strain to all objects
        0.5 + Self::speed_bonus(curr.start_time - key_prev.start_time)
    }

    fn available_fingers_for(
        hit_object: &TaikoDifficultyObject,
        hit_objects: &TaikoDifficultyObjects,
    ) -> usize {
        let prev_color_change = hit_object.color.previous_color_change(hit_objects);

        if prev_color_change.is_some_and(|change| hit_object.start_time - change.start_time < 300.0)
        {
            return 2;
        }

        let next_color_change = hit_object.color.next_color_change(hit_objects);

        if next_color_change.is_some_and(|change| change.start_time - hit_object.start_time < 300.0)
        {
            return 2;
        }

        4
    }

    fn speed_bonus(interval: f64) -> f64 {
        // * Interval is capped at a very small value to prevent infinite values.
        30.0 / f64::max(interval, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{model::hit_object::RawHitEvent, taiko::difficulty::DifficultyValues};

    use super::*;

    #[test]
    fn two_fingers_near_color_changes() {
        // objects: c r c r c
        let events: Vec<_> = (0..7)
            .map(|i| {
                let time = f64::from(i) * 100.0;

                if i % 2 == 0 {
                    RawHitEvent::center(time)
                } else {
                    RawHitEvent::rim(time)
                }
            })
            .collect();

        let objects = DifficultyValues::create_difficulty_objects(&events, 1.0);
        let values: Vec<_> = objects
            .iter()
            .map(|h| StaminaEvaluator::evaluate_diff_of(h, &objects))
            .collect();

        // fewer than two earlier objects on the same channel
        assert!(values[..4].iter().all(|v| v.abs() < f64::EPSILON));
        // two center hits back
        assert!((values[4] - (0.5 + 30.0 / 400.0)).abs() < 1e-12);
    }

    #[test]
    fn four_fingers_in_long_streams() {
        let events: Vec<_> = (0..12)
            .map(|i| RawHitEvent::center(f64::from(i) * 50.0))
            .collect();

        let objects = DifficultyValues::create_difficulty_objects(&events, 1.0);
        let values: Vec<_> = objects
            .iter()
            .map(|h| StaminaEvaluator::evaluate_diff_of(h, &objects))
            .collect();

        assert!(values[..4].iter().all(|v| v.abs() < f64::EPSILON));
        assert!((values[4] - (0.5 + 30.0 / 200.0)).abs() < 1e-12);
        assert!((values[9] - (0.5 + 30.0 / 200.0)).abs() < 1e-12);
    }

    #[test]
    fn tiny_intervals_are_capped() {
        let events = [
            RawHitEvent::rim(0.0),
            RawHitEvent::rim(0.0),
            RawHitEvent::center(0.0),
            RawHitEvent::rim(0.0),
            RawHitEvent::center(0.0),
            RawHitEvent::rim(0.0),
            RawHitEvent::center(0.0),
        ];

        let objects = DifficultyValues::create_difficulty_objects(&events, 1.0);
        let last = &objects.objects[4];

        assert!((StaminaEvaluator::evaluate_diff_of(last, &objects) - 30.5).abs() < 1e-12);
    }
}
