//! Particle colors.
//!
//! Burst particles are painted with random CSS hex tokens whose every digit
//! comes from the upper half of the hex range, so each channel lands in
//! `0x88..=0xFF` and the result is always bright against any page.

use rand::Rng;

/// The eight hex digits a bright color token may contain.
const BRIGHT_DIGITS: &[u8; 8] = b"89ABCDEF";

/// Build a random `#RRGGBB` token with every digit drawn from `8-F`.
pub fn random_bright_color<R: Rng + ?Sized>(rng: &mut R) -> String {
	let mut token = String::with_capacity(7);
	token.push('#');
	for _ in 0..6 {
		let digit = BRIGHT_DIGITS[rng.gen_range(0..BRIGHT_DIGITS.len())];
		token.push(digit as char);
	}
	token
}

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Parse a `#RRGGBB` token (either case). Anything else yields `None`.
	pub fn parse_hex(token: &str) -> Option<Self> {
		let hex = token.strip_prefix('#')?;
		if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
			return None;
		}
		let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
		Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
	}

	/// True when every hex digit of every channel is in `8-F`.
	pub fn is_bright(self) -> bool {
		[self.r, self.g, self.b]
			.iter()
			.all(|c| c >> 4 >= 0x8 && c & 0x0F >= 0x8)
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}
}
