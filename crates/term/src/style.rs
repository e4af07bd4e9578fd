//! Colours used by the console view.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Semantic tone of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Hint,
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn fg(&self) -> Rgb {
        match self {
            Tone::Info => Rgb::new(220, 220, 220),
            Tone::Hint => Rgb::new(120, 180, 255),
            Tone::Success => Rgb::new(90, 220, 120),
            Tone::Warning => Rgb::new(240, 190, 60),
            Tone::Error => Rgb::new(235, 80, 80),
        }
    }

    pub fn bold(&self) -> bool {
        matches!(self, Tone::Success | Tone::Error)
    }
}
