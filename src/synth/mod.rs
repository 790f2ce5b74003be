//! Field synthesis: one RGB color per pixel from `(seed, params, palette)`.
//!
//! Each layer is a warped, folded and tiled polar stripe field. Layers are picked per coarse cell,
//! split again inside panel masks, smeared, quantized and blended through up to three stages before
//! the cosine palette, gloss and frame turn the scalar into color.

pub(crate) mod blend;
pub(crate) mod field;
pub(crate) mod frame;
pub(crate) mod palette;
pub(crate) mod panels;
pub(crate) mod plan;
