use serde::{Deserialize, Serialize};

/// Lowest value a generated color channel may take; keeps keys light enough to read text on.
pub const CHANNEL_MIN: u8 = 100;
pub const CHANNEL_MAX: u8 = 255;

/// Display color attached to a (brand, category) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rendering() {
        assert_eq!(RgbColor::new(100, 255, 10).hex(), "#64ff0a");
        assert_eq!(RgbColor::new(255, 255, 255).to_string(), "#ffffff");
    }
}
