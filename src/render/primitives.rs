use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS hex string (`#rrggbb`, or `#rrggbbaa` when translucent)
/// when every channel sits exactly on the 8-bit grid, otherwise as an object of
/// the raw channels so values survive a round trip unchanged. Both forms are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "ColorRepr")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> DashboardResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let invalid = || DashboardError::InvalidData(format!("invalid hex color `{input}`"));
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                Self::from_hex(&expanded)
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let rgb = format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        );
        if byte(self.alpha) == u8::MAX {
            rgb
        } else {
            format!("{rgb}{:02x}", byte(self.alpha))
        }
    }

    /// Whether `to_hex` reproduces this color exactly.
    #[must_use]
    pub fn is_byte_exact(self) -> bool {
        [self.red, self.green, self.blue, self.alpha]
            .into_iter()
            .all(|v| (0.0..=1.0).contains(&v) && f64::from(byte(v)) / 255.0 == v)
    }

    pub fn validate(self) -> DashboardResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DashboardError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

const fn opaque() -> f64 {
    1.0
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels {
        red: f64,
        green: f64,
        blue: f64,
        #[serde(default = "opaque")]
        alpha: f64,
    },
}

impl TryFrom<ColorRepr> for Color {
    type Error = DashboardError;

    fn try_from(repr: ColorRepr) -> DashboardResult<Self> {
        match repr {
            ColorRepr::Hex(hex) => Self::from_hex(&hex),
            ColorRepr::Channels {
                red,
                green,
                blue,
                alpha,
            } => {
                let color = Self::rgba(red, green, blue, alpha);
                color.validate()?;
                Ok(color)
            }
        }
    }
}

impl From<Color> for ColorRepr {
    fn from(color: Color) -> Self {
        if color.is_byte_exact() {
            Self::Hex(color.to_hex())
        } else {
            Self::Channels {
                red: color.red,
                green: color.green,
                blue: color.blue,
                alpha: color.alpha,
            }
        }
    }
}
