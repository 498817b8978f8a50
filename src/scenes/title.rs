//! Opening scene: badge, headline, subtitle over a faint grid.

use crate::anim::{Extrapolate, Spring, interpolate, spring};
use crate::core::{Fps, FrameIndex, Vec2};
use crate::model::{Border, Element, Font, Layer, SceneFrame, TextSpec, theme};

const BADGE_Y: f64 = -340.0;

pub fn render(local: FrameIndex, fps: Fps) -> SceneFrame {
    let f = local.0 as f64;

    let title_opacity = interpolate(f, [0.0, 20.0], [0.0, 1.0], Extrapolate::clamp());
    let title_y = spring(f, fps, Spring {
        from: 50.0,
        to: 0.0,
        duration_frames: 30,
    });

    let subtitle_opacity = interpolate(f, [20.0, 40.0], [0.0, 1.0], Extrapolate::clamp());
    let subtitle_y = spring(f - 15.0, fps, Spring {
        from: 30.0,
        to: 0.0,
        duration_frames: 30,
    });

    let badge_opacity = interpolate(f, [40.0, 55.0], [0.0, 1.0], Extrapolate::clamp());
    let badge_scale = spring(f - 40.0, fps, Spring {
        from: 0.8,
        to: 1.0,
        duration_frames: 20,
    });

    // The badge pill, its dot, and its label animate as one unit.
    let badge = |name: &str, dx: f64, element: Element| {
        Layer::new(name, Vec2::new(dx, BADGE_Y), element)
            .opacity(badge_opacity)
            .scale(badge_scale)
    };

    let layers = vec![
        Layer::new("grid", Vec2::ZERO, Element::Grid {
            cell: 60.0,
            line: theme::BORDER,
        })
        .opacity(0.3),
        badge("badge_pill", 0.0, Element::Rect {
            width: 320.0,
            height: 58.0,
            corner_radius: 29.0,
            fill: theme::BG_SECONDARY,
            border: Some(Border {
                width: 1.0,
                color: theme::BORDER,
            }),
        }),
        badge("badge_dot", -130.0, Element::Dot {
            diameter: 10.0,
            color: theme::TEXT,
        }),
        badge(
            "badge_label",
            12.0,
            Element::text("Claude Code Skill", 24.0, theme::TEXT_SECONDARY),
        ),
        Layer::new(
            "title",
            Vec2::new(0.0, -20.0),
            Element::Text(TextSpec {
                content: "Roier SEO".to_string(),
                size: 120.0,
                weight: 800,
                color: theme::TEXT,
                font: Font::Sans,
                letter_spacing: -3.0,
            }),
        )
        .opacity(title_opacity)
        .translate(Vec2::new(0.0, title_y)),
        Layer::new(
            "subtitle",
            Vec2::new(0.0, 100.0),
            Element::text("AI-Powered Technical SEO", 48.0, theme::TEXT_SECONDARY),
        )
        .opacity(subtitle_opacity)
        .translate(Vec2::new(0.0, subtitle_y)),
    ];

    SceneFrame {
        background: theme::BG,
        layers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fps30() -> Fps {
        Fps::new(30, 1).unwrap()
    }

    fn layer<'a>(frame: &'a SceneFrame, name: &str) -> &'a Layer {
        frame
            .layers
            .iter()
            .find(|l| l.name == name)
            .unwrap_or_else(|| panic!("missing layer '{name}'"))
    }

    #[test]
    fn headline_fades_and_settles() {
        let start = render(FrameIndex(0), fps30());
        assert_eq!(layer(&start, "title").opacity, 0.0);
        assert_eq!(layer(&start, "title").transform.translate.y, 50.0);

        let settled = render(FrameIndex(60), fps30());
        assert_eq!(layer(&settled, "title").opacity, 1.0);
        assert_eq!(layer(&settled, "title").transform.translate.y, 0.0);
    }

    #[test]
    fn badge_enters_last() {
        let early = render(FrameIndex(35), fps30());
        assert_eq!(layer(&early, "badge_pill").opacity, 0.0);
        // Spring delayed to frame 40: still at its rest scale.
        assert_eq!(layer(&early, "badge_pill").transform.scale.x, 0.8);

        let late = render(FrameIndex(70), fps30());
        assert_eq!(layer(&late, "badge_pill").opacity, 1.0);
        assert_eq!(layer(&late, "badge_pill").transform.scale.x, 1.0);
    }

    #[test]
    fn past_duration_holds_terminal_state() {
        assert_eq!(render(FrameIndex(90), fps30()), render(FrameIndex(1000), fps30()));
    }
}
