//! The composition declaration handed to the rendering host, and the
//! per-frame render contract.

use crate::core::{Canvas, Fps, FrameIndex};
use crate::error::{PromoError, PromoResult};
use crate::model::SceneFrame;
use crate::scenes;
use crate::timeline::{SceneId, Timeline};

/// Frames per scene in the promo cut.
pub const SCENE_FRAMES: u64 = 90;

#[derive(Clone, Debug, serde::Serialize)]
pub struct Composition {
    pub id: String,
    pub fps: Fps,
    pub canvas: Canvas,
    pub timeline: Timeline,
}

impl Composition {
    pub fn new(
        id: impl Into<String>,
        fps: Fps,
        canvas: Canvas,
        timeline: Timeline,
    ) -> PromoResult<Self> {
        let comp = Self {
            id: id.into(),
            fps,
            canvas,
            timeline,
        };
        comp.validate()?;
        Ok(comp)
    }

    /// The promo cut: five 90-frame scenes, 15 seconds at 30 fps, 1920x1080.
    pub fn promo_video() -> PromoResult<Self> {
        let timeline = Timeline::from_durations(&[
            (SceneId::Title, SCENE_FRAMES),
            (SceneId::Problem, SCENE_FRAMES),
            (SceneId::Solution, SCENE_FRAMES),
            (SceneId::Install, SCENE_FRAMES),
            (SceneId::Cta, SCENE_FRAMES),
        ])?;

        Self::new(
            "PromoVideo",
            Fps::new(30, 1)?,
            Canvas {
                width: 1920,
                height: 1080,
            },
            timeline,
        )
    }

    pub fn validate(&self) -> PromoResult<()> {
        if self.id.trim().is_empty() {
            return Err(PromoError::validation("composition id must be non-empty"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PromoError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }

    pub fn duration(&self) -> FrameIndex {
        self.timeline.duration()
    }

    /// Evaluates one global frame into a resolved visual tree.
    ///
    /// Pure and idempotent: re-rendering any frame yields identical output, so
    /// hosts may evaluate frames in any order or in parallel. Frames at or
    /// beyond the duration return `None` (idle, not an error).
    #[tracing::instrument(skip(self), fields(id = %self.id))]
    pub fn render_frame(&self, frame: FrameIndex) -> Option<SceneFrame> {
        let active = self.timeline.active_at(frame)?;
        Some(scenes::render(active.scene, active.local, self.fps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promo_declaration_matches_the_host_contract() {
        let comp = Composition::promo_video().unwrap();
        assert_eq!(comp.id, "PromoVideo");
        assert_eq!(comp.duration(), FrameIndex(450));
        assert_eq!(comp.fps, Fps::new(30, 1).unwrap());
        assert_eq!(comp.canvas, Canvas {
            width: 1920,
            height: 1080,
        });
        assert_eq!(comp.timeline.spans().len(), 5);
    }

    #[test]
    fn render_frame_dispatches_by_span() {
        let comp = Composition::promo_video().unwrap();
        // Same local frame through two different scenes: different trees.
        let title = comp.render_frame(FrameIndex(45)).unwrap();
        let problem = comp.render_frame(FrameIndex(135)).unwrap();
        assert_ne!(title, problem);
    }

    #[test]
    fn render_frame_past_duration_is_idle() {
        let comp = Composition::promo_video().unwrap();
        assert_eq!(comp.render_frame(FrameIndex(450)), None);
    }

    #[test]
    fn validate_rejects_empty_id() {
        let comp = Composition::promo_video().unwrap();
        let bad = Composition { id: "  ".to_string(), ..comp };
        assert!(bad.validate().is_err());
    }
}
