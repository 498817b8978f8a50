//! Problem scene: a heading and four staggered fault items sliding in.

use crate::anim::{Extrapolate, Spring, interpolate, spring};
use crate::core::{Fps, FrameIndex, Vec2};
use crate::model::{Element, Layer, SceneFrame, theme};

pub const ITEMS: [&str; 4] = [
    "Missing meta descriptions",
    "No structured data",
    "Poor accessibility scores",
    "Slow Core Web Vitals",
];

/// First item starts revealing at this local frame.
pub const ITEM_BASE_DELAY: u64 = 20;
/// Each subsequent item starts this many frames after the previous one.
pub const ITEM_DELAY_STEP: u64 = 15;

const ROW_HEIGHT: f64 = 70.0;

pub fn item_delay(index: usize) -> u64 {
    ITEM_BASE_DELAY + ITEM_DELAY_STEP * index as u64
}

pub fn render(local: FrameIndex, fps: Fps) -> SceneFrame {
    let f = local.0 as f64;

    let heading_opacity = interpolate(f, [0.0, 15.0], [0.0, 1.0], Extrapolate::clamp());
    let mut layers = vec![
        Layer::new(
            "heading",
            Vec2::new(0.0, -200.0),
            Element::text("SEO issues slowing you down?", 64.0, theme::TEXT),
        )
        .opacity(heading_opacity),
    ];

    for (i, item) in ITEMS.iter().enumerate() {
        let delay = item_delay(i) as f64;
        let opacity = interpolate(f, [delay, delay + 10.0], [0.0, 1.0], Extrapolate::clamp());
        let x = spring(f - delay, fps, Spring {
            from: -50.0,
            to: 0.0,
            duration_frames: 20,
        });

        let y = -60.0 + ROW_HEIGHT * i as f64;
        layers.push(
            Layer::new(
                format!("item_{i}_mark"),
                Vec2::new(-270.0, y),
                Element::text("\u{2717}", 32.0, theme::FAULT),
            )
            .opacity(opacity)
            .translate(Vec2::new(x, 0.0)),
        );
        layers.push(
            Layer::new(
                format!("item_{i}_label"),
                Vec2::new(20.0, y),
                Element::text(*item, 36.0, theme::TEXT_SECONDARY),
            )
            .opacity(opacity)
            .translate(Vec2::new(x, 0.0)),
        );
    }

    SceneFrame {
        background: theme::BG,
        layers,
    }
}
