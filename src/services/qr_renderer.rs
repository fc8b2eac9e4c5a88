//! QR rendering for short links.
//!
//! Renders a short URL as a scannable QR code made of Unicode half-blocks,
//! suitable for terminal output.

use qrcode::render::unicode::Dense1x2;
use qrcode::{EcLevel, QrCode};

use crate::types::errors::QrRenderError;

/// Trait defining the QR renderer interface.
pub trait QrRendererTrait {
    fn render_unicode(&self, data: &str, invert: bool) -> Result<String, QrRenderError>;
}

/// Renders QR codes as Unicode half-block text.
pub struct QrRenderer;

impl QrRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl QrRendererTrait for QrRenderer {
    /// Encodes `data` at error-correction level M and renders it as text.
    ///
    /// `invert` swaps dark and light modules; pass `true` on dark terminal
    /// backgrounds so scanners still see dark-on-light.
    fn render_unicode(&self, data: &str, invert: bool) -> Result<String, QrRenderError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
            .map_err(|e| QrRenderError::Encoding(format!("{:?}", e)))?;

        let (dark, light) = if invert {
            (Dense1x2::Light, Dense1x2::Dark)
        } else {
            (Dense1x2::Dark, Dense1x2::Light)
        };

        Ok(code
            .render::<Dense1x2>()
            .dark_color(dark)
            .light_color(light)
            .quiet_zone(true)
            .build())
    }
}
