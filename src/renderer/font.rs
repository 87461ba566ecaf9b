//! Built-in 4x6 bitmap font
//!
//! Each glyph row is four bits, most significant bit on the left. Lit pixels
//! become `scale`-sized quads.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use crate::sim::Rect;

const GLYPH_WIDTH: u32 = 4;
const GLYPH_HEIGHT: u32 = 6;
/// Horizontal advance per character, in font pixels (glyph plus one column gap)
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Text sizes used by the game (pixel scale of one font pixel)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSize {
    /// HUD and game-over headline
    Large,
    /// Restart hint
    Small,
    /// Label on the fallback bucket icon
    Logo,
}

impl TextSize {
    pub fn scale(self) -> f32 {
        match self {
            TextSize::Large => 3.0,
            TextSize::Small => 2.0,
            TextSize::Logo => 3.0,
        }
    }
}

/// Glyphs for ASCII 0x20..=0x7E
static FONT_4X6: [[u8; 6]; 95] = [
    [0x0, 0x0, 0x0, 0x0, 0x0, 0x0], // space
    [0x4, 0x4, 0x4, 0x0, 0x4, 0x0], // !
    [0xA, 0xA, 0x0, 0x0, 0x0, 0x0], // "
    [0xA, 0xF, 0xA, 0xF, 0xA, 0x0], // #
    [0x4, 0xE, 0xC, 0x6, 0xE, 0x4], // $
    [0x9, 0x2, 0x4, 0x8, 0x9, 0x0], // %
    [0x4, 0xA, 0x4, 0xA, 0x5, 0x0], // &
    [0x4, 0x4, 0x0, 0x0, 0x0, 0x0], // '
    [0x2, 0x4, 0x4, 0x4, 0x2, 0x0], // (
    [0x4, 0x2, 0x2, 0x2, 0x4, 0x0], // )
    [0x0, 0xA, 0x4, 0xA, 0x0, 0x0], // *
    [0x0, 0x4, 0xE, 0x4, 0x0, 0x0], // +
    [0x0, 0x0, 0x0, 0x4, 0x4, 0x8], // ,
    [0x0, 0x0, 0xE, 0x0, 0x0, 0x0], // -
    [0x0, 0x0, 0x0, 0x0, 0x4, 0x0], // .
    [0x1, 0x2, 0x4, 0x8, 0x8, 0x0], // /
    [0x6, 0x9, 0x9, 0x9, 0x6, 0x0], // 0
    [0x4, 0xC, 0x4, 0x4, 0xE, 0x0], // 1
    [0x6, 0x9, 0x2, 0x4, 0xF, 0x0], // 2
    [0xE, 0x1, 0x6, 0x1, 0xE, 0x0], // 3
    [0x2, 0x6, 0xA, 0xF, 0x2, 0x0], // 4
    [0xF, 0x8, 0xE, 0x1, 0xE, 0x0], // 5
    [0x6, 0x8, 0xE, 0x9, 0x6, 0x0], // 6
    [0xF, 0x1, 0x2, 0x4, 0x4, 0x0], // 7
    [0x6, 0x9, 0x6, 0x9, 0x6, 0x0], // 8
    [0x6, 0x9, 0x7, 0x1, 0x6, 0x0], // 9
    [0x0, 0x4, 0x0, 0x4, 0x0, 0x0], // :
    [0x0, 0x4, 0x0, 0x4, 0x4, 0x8], // ;
    [0x1, 0x2, 0x4, 0x2, 0x1, 0x0], // <
    [0x0, 0xE, 0x0, 0xE, 0x0, 0x0], // =
    [0x4, 0x2, 0x1, 0x2, 0x4, 0x0], // >
    [0x6, 0x9, 0x2, 0x0, 0x2, 0x0], // ?
    [0x6, 0x9, 0xB, 0x8, 0x6, 0x0], // @
    [0x6, 0x9, 0xF, 0x9, 0x9, 0x0], // A
    [0xE, 0x9, 0xE, 0x9, 0xE, 0x0], // B
    [0x6, 0x9, 0x8, 0x9, 0x6, 0x0], // C
    [0xE, 0x9, 0x9, 0x9, 0xE, 0x0], // D
    [0xF, 0x8, 0xE, 0x8, 0xF, 0x0], // E
    [0xF, 0x8, 0xE, 0x8, 0x8, 0x0], // F
    [0x6, 0x8, 0xB, 0x9, 0x6, 0x0], // G
    [0x9, 0x9, 0xF, 0x9, 0x9, 0x0], // H
    [0xE, 0x4, 0x4, 0x4, 0xE, 0x0], // I
    [0x7, 0x2, 0x2, 0xA, 0x4, 0x0], // J
    [0x9, 0xA, 0xC, 0xA, 0x9, 0x0], // K
    [0x8, 0x8, 0x8, 0x8, 0xF, 0x0], // L
    [0x9, 0xF, 0xF, 0x9, 0x9, 0x0], // M
    [0x9, 0xD, 0xB, 0x9, 0x9, 0x0], // N
    [0x6, 0x9, 0x9, 0x9, 0x6, 0x0], // O
    [0xE, 0x9, 0xE, 0x8, 0x8, 0x0], // P
    [0x6, 0x9, 0x9, 0xA, 0x5, 0x0], // Q
    [0xE, 0x9, 0xE, 0xA, 0x9, 0x0], // R
    [0x6, 0x8, 0x6, 0x1, 0xE, 0x0], // S
    [0xE, 0x4, 0x4, 0x4, 0x4, 0x0], // T
    [0x9, 0x9, 0x9, 0x9, 0x6, 0x0], // U
    [0x9, 0x9, 0x9, 0x6, 0x6, 0x0], // V
    [0x9, 0x9, 0xF, 0xF, 0x9, 0x0], // W
    [0x9, 0x9, 0x6, 0x9, 0x9, 0x0], // X
    [0x9, 0x9, 0x6, 0x4, 0x4, 0x0], // Y
    [0xF, 0x1, 0x6, 0x8, 0xF, 0x0], // Z
    [0x6, 0x4, 0x4, 0x4, 0x6, 0x0], // [
    [0x8, 0x8, 0x4, 0x2, 0x1, 0x0], // backslash
    [0x6, 0x2, 0x2, 0x2, 0x6, 0x0], // ]
    [0x4, 0xA, 0x0, 0x0, 0x0, 0x0], // ^
    [0x0, 0x0, 0x0, 0x0, 0xF, 0x0], // _
    [0x4, 0x2, 0x0, 0x0, 0x0, 0x0], // `
    [0x0, 0x6, 0xA, 0xA, 0x5, 0x0], // a
    [0x8, 0xE, 0x9, 0x9, 0xE, 0x0], // b
    [0x0, 0x6, 0x8, 0x8, 0x6, 0x0], // c
    [0x1, 0x7, 0x9, 0x9, 0x7, 0x0], // d
    [0x0, 0x6, 0xF, 0x8, 0x6, 0x0], // e
    [0x2, 0x4, 0xE, 0x4, 0x4, 0x0], // f
    [0x0, 0x7, 0x9, 0x7, 0x1, 0x6], // g
    [0x8, 0xE, 0x9, 0x9, 0x9, 0x0], // h
    [0x4, 0x0, 0x4, 0x4, 0x4, 0x0], // i
    [0x2, 0x0, 0x2, 0x2, 0xA, 0x4], // j
    [0x8, 0xA, 0xC, 0xA, 0x9, 0x0], // k
    [0x4, 0x4, 0x4, 0x4, 0x2, 0x0], // l
    [0x0, 0xA, 0xF, 0x9, 0x9, 0x0], // m
    [0x0, 0xE, 0x9, 0x9, 0x9, 0x0], // n
    [0x0, 0x6, 0x9, 0x9, 0x6, 0x0], // o
    [0x0, 0xE, 0x9, 0xE, 0x8, 0x8], // p
    [0x0, 0x7, 0x9, 0x7, 0x1, 0x1], // q
    [0x0, 0xE, 0x9, 0x8, 0x8, 0x0], // r
    [0x0, 0x6, 0xC, 0x2, 0xC, 0x0], // s
    [0x4, 0xE, 0x4, 0x4, 0x2, 0x0], // t
    [0x0, 0x9, 0x9, 0x9, 0x6, 0x0], // u
    [0x0, 0x9, 0x9, 0x6, 0x6, 0x0], // v
    [0x0, 0x9, 0x9, 0xF, 0x6, 0x0], // w
    [0x0, 0x9, 0x6, 0x6, 0x9, 0x0], // x
    [0x0, 0x9, 0x9, 0x7, 0x1, 0x6], // y
    [0x0, 0xF, 0x2, 0x4, 0xF, 0x0], // z
    [0x2, 0x4, 0x8, 0x4, 0x2, 0x0], // {
    [0x4, 0x4, 0x4, 0x4, 0x4, 0x0], // |
    [0x8, 0x4, 0x2, 0x4, 0x8, 0x0], // }
    [0x0, 0x5, 0xA, 0x0, 0x0, 0x0], // ~
];

/// Glyph rows for a character; anything outside printable ASCII renders blank
fn glyph(ch: char) -> &'static [u8; 6] {
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        &FONT_4X6[(code - 0x20) as usize]
    } else {
        &FONT_4X6[0]
    }
}

/// Size of the rendered text box in pixels
pub fn measure(text: &str, size: TextSize) -> Vec2 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return Vec2::ZERO;
    }
    let scale = size.scale();
    // No trailing gap after the last glyph
    let width = (chars * ADVANCE - 1) as f32 * scale;
    Vec2::new(width, GLYPH_HEIGHT as f32 * scale)
}

/// Text with its top-left corner at `origin`
pub fn text(text: &str, origin: Vec2, size: TextSize, color: [f32; 4]) -> Vec<Vertex> {
    let scale = size.scale();
    let mut vertices = Vec::new();

    for (i, ch) in text.chars().enumerate() {
        let cell_x = origin.x + (i as u32 * ADVANCE) as f32 * scale;
        for (row, &bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    let px = Rect::new(
                        cell_x + col as f32 * scale,
                        origin.y + row as f32 * scale,
                        scale,
                        scale,
                    );
                    vertices.extend(shapes::rect(px, color));
                }
            }
        }
    }

    vertices
}

/// Text centered on `center`
pub fn text_centered(s: &str, center: Vec2, size: TextSize, color: [f32; 4]) -> Vec<Vertex> {
    let extent = measure(s, size);
    text(s, center - extent / 2.0, size, color)
}
