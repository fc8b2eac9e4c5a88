// linkshort services
// Services provide core functionality: input validation, the shortening
// client, settings, themes, and QR rendering.

pub mod qr_renderer;
pub mod settings_engine;
pub mod shortener_client;
pub mod theme_engine;
pub mod validation;
