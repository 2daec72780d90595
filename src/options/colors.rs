use serde::{Deserialize, Serialize};

/// Color palette options for the cabinet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Post-it style label plate colors, picked by drawer index.
    pub label_palette: Vec<[f32; 3]>,
    /// Fallback when the palette is empty.
    pub label_fallback: [f32; 3],
    /// Folder body color.
    pub folder: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            label_palette: vec![
                rgb(0xFF, 0xF9, 0xC4),
                rgb(0xFF, 0xCD, 0xD2),
                rgb(0xBB, 0xDE, 0xFB),
                rgb(0xDC, 0xED, 0xC8),
            ],
            label_fallback: [1.0, 1.0, 1.0],
            folder: rgb(0xFC, 0xEB, 0xB6),
        }
    }
}

impl ColorOptions {
    /// Label color for drawer `index`. Deterministic: wraps around the
    /// palette.
    #[must_use]
    pub fn label_color(&self, index: usize) -> [f32; 3] {
        if self.label_palette.is_empty() {
            return self.label_fallback;
        }
        self.label_palette[index % self.label_palette.len()]
    }
}

fn rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    [
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    ]
}
