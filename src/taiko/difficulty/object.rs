use std::slice::Iter;

use crate::{
    any::difficulty::object::{HasDeltaTime, HasStartTime, IDifficultyObject, IDifficultyObjects},
    model::hit_object::{HitType, RawHitEvent},
};

use super::{
    color::{color_data::ColorData, ColorEncoding},
    rhythm::{closest_rhythm, HitObjectRhythm},
};

#[derive(Debug)]
pub struct TaikoDifficultyObject {
    pub idx: usize,
    /// Index of the underlying hit event.
    pub event_idx: usize,
    pub delta_time: f64,
    pub start_time: f64,
    pub base_hit_type: HitType,
    pub is_strong: bool,
    /// Clock-rate adjusted time since the previous hit event of the same
    /// channel, if there is one.
    pub same_channel_delta_time: Option<f64>,
    /// Indices of the hit events preceding this object.
    pub last_event_idx: usize,
    pub last_last_event_idx: usize,
    /// Indices of the most recent earlier difficulty objects of each channel.
    pub last_center_idx: Option<usize>,
    pub last_rim_idx: Option<usize>,
    pub mono_idx: MonoIndex,
    pub note_idx: usize,
    pub rhythm: &'static HitObjectRhythm,
    pub color: ColorData,
}

impl TaikoDifficultyObject {
    pub fn new(
        events: &[RawHitEvent],
        event_idx: usize,
        clock_rate: f64,
        same_channel_delta_time: Option<f64>,
        objects: &TaikoDifficultyObjects,
    ) -> Option<Self> {
        let last_event_idx = event_idx.checked_sub(1)?;
        let last_last_event_idx = event_idx.checked_sub(2)?;

        let hit_object = events.get(event_idx)?;
        let last_object = &events[last_event_idx];
        let last_last_object = &events[last_last_event_idx];

        let delta_time = (hit_object.start_time - last_object.start_time) / clock_rate;
        let prev_delta_time = (last_object.start_time - last_last_object.start_time) / clock_rate;

        let mono_idx = match hit_object.hit_type {
            HitType::Center => MonoIndex::Center(objects.center_hit_objects.len()),
            HitType::Rim => MonoIndex::Rim(objects.rim_hit_objects.len()),
        };

        Some(Self {
            idx: objects.len(),
            event_idx,
            delta_time,
            start_time: hit_object.start_time / clock_rate,
            base_hit_type: hit_object.hit_type,
            is_strong: hit_object.is_strong,
            same_channel_delta_time,
            last_event_idx,
            last_last_event_idx,
            last_center_idx: objects.center_hit_objects.last().copied(),
            last_rim_idx: objects.rim_hit_objects.last().copied(),
            mono_idx,
            note_idx: objects.note_objects.len(),
            rhythm: closest_rhythm(delta_time, prev_delta_time),
            color: ColorData::default(),
        })
    }
}

/// Position of an object within the list of its channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MonoIndex {
    Center(usize),
    Rim(usize),
}

/// Append-only list of difficulty objects.
///
/// Objects refer to each other only through their index in this list.
#[derive(Debug, Default)]
pub struct TaikoDifficultyObjects {
    pub objects: Vec<TaikoDifficultyObject>,
    pub center_hit_objects: Vec<usize>,
    pub rim_hit_objects: Vec<usize>,
    pub note_objects: Vec<usize>,
    pub color: ColorEncoding,
}

impl TaikoDifficultyObjects {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::with_capacity(capacity),
            // mean=301.7 | median=215
            center_hit_objects: Vec::with_capacity(256),
            // mean=309.21 | median=229
            rim_hit_objects: Vec::with_capacity(256),
            note_objects: Vec::with_capacity(capacity),
            color: ColorEncoding::default(),
        }
    }

    pub fn push(&mut self, hit_object: TaikoDifficultyObject) {
        let idx = hit_object.idx;

        match hit_object.mono_idx {
            MonoIndex::Center(_) => self.center_hit_objects.push(idx),
            MonoIndex::Rim(_) => self.rim_hit_objects.push(idx),
        }

        self.note_objects.push(idx);
        self.objects.push(hit_object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, TaikoDifficultyObject> {
        self.objects.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&TaikoDifficultyObject> {
        self.objects.get(idx)
    }

    pub fn previous_mono(
        &self,
        curr: &TaikoDifficultyObject,
        backwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        let (mono_idx, list) = match curr.mono_idx {
            MonoIndex::Center(idx) => (idx, &self.center_hit_objects),
            MonoIndex::Rim(idx) => (idx, &self.rim_hit_objects),
        };

        mono_idx
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| list.get(idx))
            .and_then(|&idx| self.get(idx))
    }

    pub fn previous_note(
        &self,
        curr: &TaikoDifficultyObject,
        backwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        curr.note_idx
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| self.note_objects.get(idx))
            .and_then(|&idx| self.get(idx))
    }

    pub fn next_note(
        &self,
        curr: &TaikoDifficultyObject,
        forwards_idx: usize,
    ) -> Option<&TaikoDifficultyObject> {
        self.note_objects
            .get(curr.note_idx + (forwards_idx + 1))
            .and_then(|&idx| self.get(idx))
    }
}

impl IDifficultyObject for TaikoDifficultyObject {
    type DifficultyObjects = TaikoDifficultyObjects;

    fn idx(&self) -> usize {
        self.idx
    }
}

impl IDifficultyObjects for TaikoDifficultyObjects {
    type DifficultyObject = TaikoDifficultyObject;

    fn get(&self, idx: usize) -> Option<&Self::DifficultyObject> {
        self.objects.get(idx)
    }
}

impl HasStartTime for TaikoDifficultyObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

impl HasDeltaTime for TaikoDifficultyObject {
    fn delta_time(&self) -> f64 {
        self.delta_time
    }
}

impl PartialEq for TaikoDifficultyObject {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx
    }
}
