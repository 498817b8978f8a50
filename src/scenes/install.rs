//! Install scene: the install command types itself out behind a blinking
//! cursor.

use crate::anim::{Extrapolate, Spring, interpolate, spring};
use crate::core::{Fps, FrameIndex, Vec2};
use crate::model::{Border, Element, Font, Layer, SceneFrame, TextSpec, theme};

pub const COMMAND: &str = "npx skills add kemenystudio/roier-skill";

/// Typing begins once the local frame passes this point.
pub const TYPE_START: u64 = 30;
/// Frames spent per typed character.
pub const FRAMES_PER_CHAR: f64 = 1.5;

const CURSOR_PERIOD: u64 = 15;
const CURSOR_ON_FRAMES: u64 = 10;

/// Number of command characters visible at `local`.
///
/// Floor of elapsed frames over the per-character cost, clamped to the full
/// command length. Nothing is typed at or before the start frame.
pub fn typed_len(local: FrameIndex) -> usize {
    if local.0 <= TYPE_START {
        return 0;
    }
    let elapsed = (local.0 - TYPE_START) as f64;
    let chars = (elapsed / FRAMES_PER_CHAR).floor() as usize;
    chars.min(COMMAND.len())
}

/// Cursor blink: on for the first 10 frames of every 15-frame cycle, and only
/// once typing has begun.
pub fn cursor_visible(local: FrameIndex) -> bool {
    local.0 > TYPE_START && local.0 % CURSOR_PERIOD < CURSOR_ON_FRAMES
}

pub fn render(local: FrameIndex, fps: Fps) -> SceneFrame {
    let f = local.0 as f64;

    let label_opacity = interpolate(f, [0.0, 15.0], [0.0, 1.0], Extrapolate::clamp());
    let command_opacity = interpolate(f, [15.0, 30.0], [0.0, 1.0], Extrapolate::clamp());
    let command_scale = spring(f - 15.0, fps, Spring {
        from: 0.95,
        to: 1.0,
        duration_frames: 20,
    });

    let layers = vec![
        Layer::new(
            "label",
            Vec2::new(0.0, -160.0),
            Element::Text(TextSpec {
                content: "ONE-CLICK INSTALL".to_string(),
                size: 32.0,
                weight: 400,
                color: theme::TEXT_SECONDARY,
                font: Font::Sans,
                letter_spacing: 4.0,
            }),
        )
        .opacity(label_opacity),
        Layer::new("panel", Vec2::new(0.0, 30.0), Element::Rect {
            width: 1240.0,
            height: 130.0,
            corner_radius: 16.0,
            fill: theme::CODE_BG,
            border: Some(Border {
                width: 1.0,
                color: theme::BORDER,
            }),
        })
        .opacity(command_opacity)
        .scale(command_scale),
        Layer::new("command", Vec2::new(0.0, 30.0), Element::CodeLine {
            prompt: "$ ".to_string(),
            typed: COMMAND[..typed_len(local)].to_string(),
            cursor: cursor_visible(local),
        })
        .opacity(command_opacity)
        .scale(command_scale),
    ];

    SceneFrame {
        background: theme::BG,
        layers,
    }
}
