//! Timeline composition: each scene owns a disjoint, contiguous span of the
//! master frame sequence.
//!
//! Spans are derived from an ordered duration list at construction time, so
//! contiguity/non-overlap is an invariant of the builder, not something the
//! per-frame lookup re-checks.

use crate::core::{FrameIndex, FrameRange};
use crate::error::{PromoError, PromoResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum SceneId {
    Title,
    Problem,
    Solution,
    Install,
    Cta,
}

impl SceneId {
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::Install => "install",
            Self::Cta => "cta",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneSpan {
    pub scene: SceneId,
    pub range: FrameRange, // [start, end) on the master timeline
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct Timeline {
    spans: Vec<SceneSpan>,
    duration: FrameIndex,
}

/// The scene a frame landed in, with the frame rebased to the span start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveScene {
    pub scene: SceneId,
    pub local: FrameIndex,
}

impl Timeline {
    /// Builds a timeline from an ordered list of (scene, duration) pairs.
    ///
    /// Each scene's start offset is the cumulative sum of all prior durations;
    /// the total duration is the sum of all durations.
    pub fn from_durations(entries: &[(SceneId, u64)]) -> PromoResult<Self> {
        if entries.is_empty() {
            return Err(PromoError::timeline("timeline needs at least one scene"));
        }

        let mut spans: Vec<SceneSpan> = Vec::with_capacity(entries.len());
        let mut cursor = 0u64;
        for &(scene, duration) in entries {
            if duration == 0 {
                return Err(PromoError::timeline(format!(
                    "scene '{}' has zero duration",
                    scene.name()
                )));
            }
            if spans.iter().any(|s| s.scene == scene) {
                return Err(PromoError::timeline(format!(
                    "scene '{}' appears more than once",
                    scene.name()
                )));
            }

            let end = cursor.checked_add(duration).ok_or_else(|| {
                PromoError::timeline("timeline duration overflows the frame counter")
            })?;
            spans.push(SceneSpan {
                scene,
                range: FrameRange::new(FrameIndex(cursor), FrameIndex(end))?,
            });
            cursor = end;
        }

        Ok(Self {
            spans,
            duration: FrameIndex(cursor),
        })
    }

    pub fn duration(&self) -> FrameIndex {
        self.duration
    }

    pub fn spans(&self) -> &[SceneSpan] {
        &self.spans
    }

    /// Finds the span containing `frame` and rebases the frame to it.
    ///
    /// Frames at or beyond the total duration return `None`: that is the
    /// normal idle state past the end of the video, not an error.
    pub fn active_at(&self, frame: FrameIndex) -> Option<ActiveScene> {
        let idx = self.spans.partition_point(|s| s.range.end.0 <= frame.0);
        let span = self.spans.get(idx)?;
        if !span.range.contains(frame) {
            return None;
        }
        Some(ActiveScene {
            scene: span.scene,
            local: FrameIndex(frame.0 - span.range.start.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_scenes() -> Timeline {
        Timeline::from_durations(&[
            (SceneId::Title, 90),
            (SceneId::Problem, 90),
            (SceneId::Solution, 90),
            (SceneId::Install, 90),
            (SceneId::Cta, 90),
        ])
        .unwrap()
    }

    #[test]
    fn cumulative_offsets_and_total() {
        let tl = five_scenes();
        assert_eq!(tl.duration(), FrameIndex(450));
        let starts: Vec<u64> = tl.spans().iter().map(|s| s.range.start.0).collect();
        assert_eq!(starts, vec![0, 90, 180, 270, 360]);
    }

    #[test]
    fn active_at_rebases_local_frame() {
        let tl = five_scenes();

        let a = tl.active_at(FrameIndex(0)).unwrap();
        assert_eq!((a.scene, a.local), (SceneId::Title, FrameIndex(0)));

        let a = tl.active_at(FrameIndex(90)).unwrap();
        assert_eq!((a.scene, a.local), (SceneId::Problem, FrameIndex(0)));

        let a = tl.active_at(FrameIndex(269)).unwrap();
        assert_eq!((a.scene, a.local), (SceneId::Solution, FrameIndex(89)));
    }

    #[test]
    fn frames_past_the_end_are_idle() {
        let tl = five_scenes();
        assert_eq!(tl.active_at(FrameIndex(450)), None);
        assert_eq!(tl.active_at(FrameIndex(100_000)), None);
    }

    #[test]
    fn rejects_zero_duration_scene() {
        let err = Timeline::from_durations(&[(SceneId::Title, 0)]).unwrap_err();
        assert!(err.to_string().contains("zero duration"));
    }

    #[test]
    fn rejects_duplicate_scene() {
        let err =
            Timeline::from_durations(&[(SceneId::Title, 90), (SceneId::Title, 90)]).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn rejects_empty_timeline() {
        assert!(Timeline::from_durations(&[]).is_err());
    }
}
