use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AtResult;
use crate::geometry::Point;

/// One per-tick observation from the gesture collaborator (camera hand
/// tracker, or a pointer device mapped onto the same shape: a click is a
/// single sample with `fist: true`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    /// Fingertip position; `None` means no hand detected this tick.
    pub point: Option<Point>,

    /// Level of the confirmation gesture (closed fist / held button).
    #[serde(default)]
    pub fist: bool,
}

impl GestureSample {
    pub fn hover(x: f32, y: f32) -> Self {
        Self {
            point: Some(Point::new(x, y)),
            fist: false,
        }
    }

    pub fn fist(x: f32, y: f32) -> Self {
        Self {
            point: Some(Point::new(x, y)),
            fist: true,
        }
    }

    pub fn empty() -> Self {
        Self {
            point: None,
            fist: false,
        }
    }
}

/// Supplies one sample per engine tick.
pub trait GestureSource {
    /// `None` means the source is exhausted (end of trace / shutdown).
    fn next_sample(&mut self) -> Option<GestureSample>;
}

/// Replays a recorded JSON array of samples. Stands in for the live
/// camera pipeline, which is an external collaborator.
pub struct TraceSource {
    samples: std::vec::IntoIter<GestureSample>,
}

impl TraceSource {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AtResult<Self> {
        let content = fs::read_to_string(path)?;
        let samples: Vec<GestureSample> = serde_json::from_str(&content)?;
        Ok(Self::from_samples(samples))
    }

    pub fn from_samples(samples: Vec<GestureSample>) -> Self {
        Self {
            samples: samples.into_iter(),
        }
    }
}

impl GestureSource for TraceSource {
    fn next_sample(&mut self) -> Option<GestureSample> {
        self.samples.next()
    }
}
