//! On-disk data formats, chosen by file extension.

use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum DataFormat {
    Ron,
    Json,
    Toml,
}

impl DataFormat {
    /// Extensions in lookup preference order.
    pub const PREFERENCE: [Self; 3] = [Self::Ron, Self::Json, Self::Toml];

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ron => "ron",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Detects the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        Self::PREFERENCE
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_extensions() {
        assert_eq!(DataFormat::from_path(Path::new("a/b.ron")), Some(DataFormat::Ron));
        assert_eq!(DataFormat::from_path(Path::new("b.JSON")), Some(DataFormat::Json));
        assert_eq!(DataFormat::from_path(Path::new("config.toml")), Some(DataFormat::Toml));
        assert_eq!(DataFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(DataFormat::from_path(Path::new("subjects")), None);
    }
}
