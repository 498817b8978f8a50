//! Closing call-to-action: logo tile, tagline, repository URL.

use crate::anim::{Extrapolate, Spring, interpolate, spring};
use crate::core::{Fps, FrameIndex, Rgba8, Vec2};
use crate::model::{Border, Element, Font, Layer, SceneFrame, TextSpec, theme};

const LOGO_Y: f64 = -170.0;

pub fn render(local: FrameIndex, fps: Fps) -> SceneFrame {
    let f = local.0 as f64;

    let logo_opacity = interpolate(f, [0.0, 20.0], [0.0, 1.0], Extrapolate::clamp());
    let logo_scale = spring(f, fps, Spring {
        from: 0.8,
        to: 1.0,
        duration_frames: 25,
    });

    let text_opacity = interpolate(f, [20.0, 35.0], [0.0, 1.0], Extrapolate::clamp());
    let url_opacity = interpolate(f, [40.0, 55.0], [0.0, 1.0], Extrapolate::clamp());

    let layers = vec![
        Layer::new("glow", Vec2::ZERO, Element::Glow {
            radius: 300.0,
            color: Rgba8::new(255, 255, 255, 13),
        }),
        Layer::new("logo_tile", Vec2::new(0.0, LOGO_Y), Element::Rect {
            width: 120.0,
            height: 120.0,
            corner_radius: 24.0,
            fill: theme::BG_SECONDARY,
            border: Some(Border {
                width: 2.0,
                color: theme::BORDER,
            }),
        })
        .opacity(logo_opacity)
        .scale(logo_scale),
        Layer::new(
            "logo_mark",
            Vec2::new(0.0, LOGO_Y),
            Element::Text(TextSpec {
                content: "R".to_string(),
                size: 64.0,
                weight: 800,
                color: theme::TEXT,
                font: Font::Sans,
                letter_spacing: 0.0,
            }),
        )
        .opacity(logo_opacity)
        .scale(logo_scale),
        Layer::new(
            "tagline",
            Vec2::new(0.0, 10.0),
            Element::Text(TextSpec {
                content: "Fix your SEO today".to_string(),
                size: 72.0,
                weight: 700,
                color: theme::TEXT,
                font: Font::Sans,
                letter_spacing: 0.0,
            }),
        )
        .opacity(text_opacity),
        Layer::new(
            "url",
            Vec2::new(0.0, 120.0),
            Element::text(
                "github.com/kemenystudio/roier-skill",
                32.0,
                theme::TEXT_SECONDARY,
            ),
        )
        .opacity(url_opacity),
    ];

    SceneFrame {
        background: theme::BG,
        layers,
    }
}
