//! Font bundled with the crate so the CLI and demos work out of the box.
//! Library callers can pass any `ab_glyph` font to the renderer instead.

use ab_glyph::FontRef;

// DejaVu Sans, Bitstream Vera license (see assets/FONT-LICENSE).
static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// The bundled DejaVu Sans face.
pub fn default_font() -> FontRef<'static> {
    FontRef::try_from_slice(FONT_BYTES).expect("bundled font parses")
}
