//! Built-in 8x8 bitmap font, used when a configured font cannot be loaded.

use font8x8::{BASIC_FONTS, BLOCK_FONTS, BOX_FONTS, GREEK_FONTS, LATIN_FONTS, UnicodeFonts};

/// Glyph cell size in unscaled pixels
pub const CELL: u32 = 8;

/// Looks up the bitmap of a character. Each byte is one row, bit 0 is the
/// leftmost pixel. Unknown characters render as `?`.
pub fn glyph_rows(ch: char) -> [u8; 8] {
	BASIC_FONTS
		.get(ch)
		.or_else(|| LATIN_FONTS.get(ch))
		.or_else(|| GREEK_FONTS.get(ch))
		.or_else(|| BOX_FONTS.get(ch))
		.or_else(|| BLOCK_FONTS.get(ch))
		.or_else(|| BASIC_FONTS.get('?'))
		.unwrap_or([0; 8])
}

/// Visits every lit pixel of `text` rendered at integer `scale`.
pub fn for_each_pixel(text: &str, scale: u32, mut f: impl FnMut(i32, i32)) {
	let cell = (CELL * scale) as i32;

	for (index, ch) in text.chars().filter(|c| !c.is_control()).enumerate() {
		let origin_x = index as i32 * cell;
		for (row, bits) in glyph_rows(ch).iter().enumerate() {
			for col in 0..CELL {
				if bits & (1 << col) == 0 {
					continue;
				}
				let x0 = origin_x + (col * scale) as i32;
				let y0 = row as i32 * scale as i32;
				for dy in 0..scale as i32 {
					for dx in 0..scale as i32 {
						f(x0 + dx, y0 + dy);
					}
				}
			}
		}
	}
}

/// Returns the advance width of `text` at integer `scale`.
pub fn advance(text: &str, scale: u32) -> i32 {
	text.chars().filter(|c| !c.is_control()).count() as i32 * (CELL * scale) as i32
}
