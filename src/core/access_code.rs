//! Access QR code pointing entrants at the registration page.

use crate::errors::{Error, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use qrcode::{QrCode, render::svg};

/// Encodes `join_url` as a QR code and returns it as an SVG data URL.
pub fn generate_access_code(join_url: &str) -> Result<String> {
    let code = QrCode::new(join_url.as_bytes()).map_err(|e| Error::Encoding {
        message: e.to_string(),
    })?;
    let image = code
        .render::<svg::Color<'_>>()
        .min_dimensions(200, 200)
        .build();
    Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(image)))
}
