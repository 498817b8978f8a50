#![forbid(unsafe_code)]

pub mod anim;
pub mod composition;
pub mod core;
pub mod error;
pub mod model;
pub mod scenes;
pub mod timeline;

pub use crate::anim::{Edge, Extrapolate, Spring, interpolate, spring};
pub use crate::composition::Composition;
pub use crate::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8, Transform2D, Vec2};
pub use crate::error::{PromoError, PromoResult};
pub use crate::model::{Element, Layer, SceneFrame};
pub use crate::timeline::{ActiveScene, SceneId, SceneSpan, Timeline};
