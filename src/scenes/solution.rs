//! Solution scene: heading plus a 2x2 grid of feature cards popping in.

use crate::anim::{Extrapolate, Spring, interpolate, spring};
use crate::core::{Fps, FrameIndex, Vec2};
use crate::model::{Border, Element, Font, Layer, SceneFrame, TextSpec, theme};

pub const FEATURES: [(&str, &str); 4] = [
    ("\u{1f50d}", "Lighthouse Audits"),
    ("\u{1f527}", "Auto-Fix Issues"),
    ("\u{26a1}", "Framework Aware"),
    ("\u{1f4ca}", "Core Web Vitals"),
];

pub const CARD_BASE_DELAY: u64 = 25;
pub const CARD_DELAY_STEP: u64 = 12;

const CARD_W: f64 = 430.0;
const CARD_H: f64 = 110.0;
const GRID_X: f64 = 235.0; // column centers at +-GRID_X
const GRID_TOP: f64 = 60.0;
const GRID_ROW: f64 = 170.0;

pub fn card_delay(index: usize) -> u64 {
    CARD_BASE_DELAY + CARD_DELAY_STEP * index as u64
}

pub fn render(local: FrameIndex, fps: Fps) -> SceneFrame {
    let f = local.0 as f64;

    let heading_opacity = interpolate(f, [0.0, 15.0], [0.0, 1.0], Extrapolate::clamp());
    let heading_scale = spring(f, fps, Spring {
        from: 0.9,
        to: 1.0,
        duration_frames: 20,
    });

    let mut layers = vec![
        Layer::new(
            "heading",
            Vec2::new(0.0, -240.0),
            Element::Text(TextSpec {
                content: "One skill. Everything fixed.".to_string(),
                size: 72.0,
                weight: 700,
                color: theme::TEXT,
                font: Font::Sans,
                letter_spacing: 0.0,
            }),
        )
        .opacity(heading_opacity)
        .scale(heading_scale),
    ];

    for (i, (icon, label)) in FEATURES.iter().enumerate() {
        let delay = card_delay(i) as f64;
        let opacity = interpolate(f, [delay, delay + 10.0], [0.0, 1.0], Extrapolate::clamp());
        let scale = spring(f - delay, fps, Spring {
            from: 0.8,
            to: 1.0,
            duration_frames: 15,
        });

        let col = (i % 2) as f64;
        let row = (i / 2) as f64;
        let cx = -GRID_X + 2.0 * GRID_X * col;
        let cy = GRID_TOP + GRID_ROW * row;

        let card = |name: String, dx: f64, element: Element| {
            Layer::new(name, Vec2::new(cx + dx, cy), element)
                .opacity(opacity)
                .scale(scale)
        };

        layers.push(card(format!("card_{i}_panel"), 0.0, Element::Rect {
            width: CARD_W,
            height: CARD_H,
            corner_radius: 16.0,
            fill: theme::BG_SECONDARY,
            border: Some(Border {
                width: 1.0,
                color: theme::BORDER,
            }),
        }));
        layers.push(card(
            format!("card_{i}_icon"),
            -150.0,
            Element::text(*icon, 48.0, theme::TEXT),
        ));
        layers.push(card(
            format!("card_{i}_label"),
            30.0,
            Element::Text(TextSpec {
                content: (*label).to_string(),
                size: 28.0,
                weight: 600,
                color: theme::TEXT,
                font: Font::Sans,
                letter_spacing: 0.0,
            }),
        ));
    }

    SceneFrame {
        background: theme::BG,
        layers,
    }
}
