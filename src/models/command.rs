use ppm_raster::Transform;

/// A menu command entered during an interactive session.
///
/// | Code | Command |
/// |------|---------|
/// | 0 | release all images and exit |
/// | 1 | grayscale |
/// | 2 | black-and-white |
/// | 3 | compress |
/// | 4 | dither |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Apply(Transform),
}

impl Command {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Command::Exit),
            1 => Some(Command::Apply(Transform::Grayscale)),
            2 => Some(Command::Apply(Transform::BlackAndWhite)),
            3 => Some(Command::Apply(Transform::Compress)),
            4 => Some(Command::Apply(Transform::Dither)),
            _ => None,
        }
    }

    /// Parse one whitespace-free token typed at the menu prompt.
    pub fn parse(token: &str) -> Option<Self> {
        token.parse().ok().and_then(Self::from_code)
    }
}
