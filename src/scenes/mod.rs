//! The five promo scenes.
//!
//! Every scene is a pure function of (local frame, fps): no I/O, no shared
//! state, no randomness. A scene never knows where it sits on the master
//! timeline; it always counts from its own frame zero.

pub mod cta;
pub mod install;
pub mod problem;
pub mod solution;
pub mod title;

use crate::core::{Fps, FrameIndex};
use crate::model::SceneFrame;
use crate::timeline::SceneId;

pub fn render(scene: SceneId, local: FrameIndex, fps: Fps) -> SceneFrame {
    match scene {
        SceneId::Title => title::render(local, fps),
        SceneId::Problem => problem::render(local, fps),
        SceneId::Solution => solution::render(local, fps),
        SceneId::Install => install::render(local, fps),
        SceneId::Cta => cta::render(local, fps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::theme;

    #[test]
    fn every_scene_renders_on_the_dark_background() {
        let fps = Fps::new(30, 1).unwrap();
        for scene in [
            SceneId::Title,
            SceneId::Problem,
            SceneId::Solution,
            SceneId::Install,
            SceneId::Cta,
        ] {
            let frame = render(scene, FrameIndex(45), fps);
            assert_eq!(frame.background, theme::BG, "scene {}", scene.name());
            assert!(!frame.layers.is_empty(), "scene {}", scene.name());
        }
    }
}
