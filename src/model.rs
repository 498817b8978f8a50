//! The resolved visual tree a scene hands back to the rendering host.
//!
//! Everything here is post-animation: every opacity, offset, and scale is a
//! concrete number for one instant. The host rasterizes this; we never do.

use crate::core::{Rgba8, Transform2D, Vec2};

/// One fully-evaluated frame of one scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    pub background: Rgba8,
    pub layers: Vec<Layer>,
}

/// A positioned, styled element. Layers are listed back-to-front.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    pub name: String,
    /// Layout offset from the canvas center, in pixels.
    pub pos: Vec2,
    /// Animated translate/scale on top of `pos`.
    pub transform: Transform2D,
    /// Resolved opacity in [0, 1].
    pub opacity: f64,
    pub element: Element,
}

impl Layer {
    pub fn new(name: impl Into<String>, pos: Vec2, element: Element) -> Self {
        Self {
            name: name.into(),
            pos,
            transform: Transform2D::default(),
            opacity: 1.0,
            element,
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn translate(mut self, offset: Vec2) -> Self {
        self.transform.translate = offset;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.transform.scale = Vec2::new(scale, scale);
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind")]
pub enum Element {
    /// Full-canvas square grid of hairlines.
    Grid { cell: f64, line: Rgba8 },
    /// Soft radial glow fading to transparent at `radius`.
    Glow { radius: f64, color: Rgba8 },
    Rect {
        width: f64,
        height: f64,
        corner_radius: f64,
        fill: Rgba8,
        border: Option<Border>,
    },
    Dot { diameter: f64, color: Rgba8 },
    Text(TextSpec),
    /// A terminal readout mid-typing: prompt, typed-so-far text, cursor state.
    CodeLine {
        prompt: String,
        typed: String,
        cursor: bool,
    },
}

impl Element {
    /// Sans-serif text with regular weight and default letter spacing.
    pub fn text(content: impl Into<String>, size: f64, color: Rgba8) -> Self {
        Self::Text(TextSpec {
            content: content.into(),
            size,
            weight: 400,
            color,
            font: Font::Sans,
            letter_spacing: 0.0,
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextSpec {
    pub content: String,
    pub size: f64,
    pub weight: u16,
    pub color: Rgba8,
    pub font: Font,
    pub letter_spacing: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Font {
    Sans,
    Mono,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Border {
    pub width: f64,
    pub color: Rgba8,
}

/// The promo's dark palette.
pub mod theme {
    use crate::core::Rgba8;

    pub const BG: Rgba8 = Rgba8::opaque(0x0a, 0x0a, 0x0b);
    pub const BG_SECONDARY: Rgba8 = Rgba8::opaque(0x11, 0x11, 0x13);
    pub const TEXT: Rgba8 = Rgba8::opaque(0xfa, 0xfa, 0xfa);
    pub const TEXT_SECONDARY: Rgba8 = Rgba8::opaque(0xa1, 0xa1, 0xaa);
    pub const BORDER: Rgba8 = Rgba8::opaque(0x27, 0x27, 0x2a);
    pub const CODE_BG: Rgba8 = Rgba8::opaque(0x18, 0x18, 0x1b);
    pub const FAULT: Rgba8 = Rgba8::opaque(0xef, 0x44, 0x44);
}
