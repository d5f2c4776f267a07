//! Iteration counts to colors.  Integer arithmetic, masked to a byte
//! per channel.
use std::str::FromStr;

use buffer::Rgb;

/// Which mapping from iteration count to color to use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Red tracks the count, green and blue climb sixteen and eight
    /// times faster and wrap.
    Shifted,
    /// Each channel climbs linearly at its own rate (2, 3 and 5).
    Linear,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Shifted
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shifted" => Ok(Palette::Shifted),
            "linear" => Ok(Palette::Linear),
            _ => Err(format!("Unknown palette '{}'", s)),
        }
    }
}

impl Palette {
    /// The color for an iteration count.
    pub fn color(self, iter: usize) -> Rgb {
        match self {
            Palette::Shifted => color_map(iter),
            Palette::Linear => Rgb(
                ((iter * 2) & 0xff) as u8,
                ((iter * 3) & 0xff) as u8,
                ((iter * 5) & 0xff) as u8,
            ),
        }
    }
}

/// The classic mapping: `(iter, iter·256/16, iter·256/32)`, each
/// masked to eight bits.
pub fn color_map(iter: usize) -> Rgb {
    Rgb(
        (iter & 0xff) as u8,
        ((iter * 256 / 16) & 0xff) as u8,
        ((iter * 256 / 32) & 0xff) as u8,
    )
}
