use std::collections::BTreeSet;

use crate::{
    animation::ease::Ease,
    composite::layer::CompositeLayer,
    composite::property::EdgeProperty,
    foundation::error::{BoundsError, BoundsResult},
};

/// One keyed value of a [`PropertyTrack`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Time of the key in milliseconds.
    pub at_ms: u64,
    /// Property value at this key.
    pub value: f64,
    /// Curve shaping the segment toward the next key.
    #[serde(default)]
    pub ease: Ease,
}

impl Keyframe {
    /// Linear key at `at_ms`.
    pub fn new(at_ms: u64, value: f64) -> Self {
        Self {
            at_ms,
            value,
            ease: Ease::Linear,
        }
    }

    /// Replace the segment ease.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Keyframes driving one edge property of one child.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyTrack {
    /// Index of the target child in the layer.
    pub child: usize,
    /// Property written on that child.
    pub property: EdgeProperty,
    /// Keys sorted by `at_ms`.
    pub keys: Vec<Keyframe>,
}

impl PropertyTrack {
    /// Requires at least one key and keys sorted by time.
    pub fn validate(&self) -> BoundsResult<()> {
        if self.keys.is_empty() {
            return Err(BoundsError::animation(format!(
                "track for child {} '{}' has no keyframes",
                self.child, self.property
            )));
        }
        if !self.keys.windows(2).all(|w| w[0].at_ms <= w[1].at_ms) {
            return Err(BoundsError::animation(format!(
                "track for child {} '{}' keys must be sorted by at_ms",
                self.child, self.property
            )));
        }
        Ok(())
    }

    /// Samples the track at `at_ms`, holding the end values outside the keyed range.
    pub fn sample(&self, at_ms: u64) -> BoundsResult<f64> {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(BoundsError::animation(format!(
                    "track '{}' has no keyframes",
                    self.property
                )));
            }
        };

        let idx = self.keys.partition_point(|k| k.at_ms <= at_ms);
        if idx == 0 {
            return Ok(first.value);
        }
        if idx >= self.keys.len() {
            return Ok(last.value);
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at_ms.saturating_sub(a.at_ms);
        if span == 0 {
            return Ok(a.value);
        }
        let t = a.ease.apply((at_ms - a.at_ms) as f64 / span as f64);
        Ok(a.value + (b.value - a.value) * t)
    }

    /// Time of the last key, or 0.
    pub fn end_ms(&self) -> u64 {
        self.keys.last().map_or(0, |k| k.at_ms)
    }
}

/// A set of property tracks applied together to a [`CompositeLayer`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Tracks, applied in order.
    #[serde(default)]
    pub tracks: Vec<PropertyTrack>,
}

impl Timeline {
    /// Timeline without tracks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track.
    pub fn with_track(mut self, track: PropertyTrack) -> Self {
        self.tracks.push(track);
        self
    }

    /// True when there are no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Validates every track.
    pub fn validate(&self) -> BoundsResult<()> {
        self.tracks.iter().try_for_each(PropertyTrack::validate)
    }

    /// Time of the last keyframe across all tracks.
    pub fn duration_ms(&self) -> u64 {
        self.tracks
            .iter()
            .map(PropertyTrack::end_ms)
            .max()
            .unwrap_or(0)
    }

    /// Writes every track's sample at `at_ms` into `layer`, then recomputes each touched child
    /// once.
    ///
    /// All tracks are checked against the layer before anything is written, so a failing
    /// call leaves the layer unchanged.
    #[tracing::instrument(skip(self, layer), fields(tracks = self.tracks.len()))]
    pub fn apply<T>(&self, layer: &mut CompositeLayer<T>, at_ms: u64) -> BoundsResult<()> {
        let mut samples = Vec::with_capacity(self.tracks.len());
        for track in &self.tracks {
            if track.child >= layer.len() {
                return Err(BoundsError::animation(format!(
                    "track '{}' targets child {} but layer has {} children",
                    track.property,
                    track.child,
                    layer.len()
                )));
            }
            samples.push((track, track.sample(at_ms)?));
        }

        let mut touched = BTreeSet::new();
        for (track, value) in samples {
            if let Some(child) = layer.child_mut(track.child) {
                track.property.set_sampled(child.rules_mut(), value);
                touched.insert(track.child);
            }
        }
        for index in touched {
            layer.recompute_bounds(index)?;
        }
        tracing::debug!(at_ms, "timeline applied");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
