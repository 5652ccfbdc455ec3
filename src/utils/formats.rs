use std::ffi::{OsStr, OsString};

/// Source formats picked up by the batch converter.
///
/// Matching is an exact, case-sensitive suffix test on the raw file name
/// bytes: `.jpeg`, `.JPG` and `.PNG` are not recognised, while names that
/// are not valid UTF-8 still match as long as they end in `.png` / `.jpg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Jpg,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 2] = [Self::Png, Self::Jpg];

    /// File name suffix, including the dot
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Jpg => ".jpg",
        }
    }

    /// Returns the format whose suffix `name` ends with, if any.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::from_os_name(OsStr::new(name))
    }

    pub fn from_os_name(name: &OsStr) -> Option<Self> {
        let bytes = name.as_encoded_bytes();
        Self::ALL
            .into_iter()
            .find(|f| bytes.ends_with(f.suffix().as_bytes()))
    }
}

/// Output extension, without the dot
pub const WEBP_EXTENSION: &str = "webp";

/// Derives the WebP file name by replacing everything after the last `.`.
///
/// `photo.v2.png` becomes `photo.v2.webp`. A name without a dot just gets
/// `.webp` appended. Works on the encoded bytes, so non-UTF-8 stems are kept
/// as they are.
pub fn webp_file_name(name: &OsStr) -> OsString {
    let bytes = name.as_encoded_bytes();
    let stem = match bytes.iter().rposition(|&b| b == b'.') {
        // SAFETY: the split point is an ASCII '.', which is a valid boundary
        // for encoded bytes that came from an `OsStr`.
        Some(idx) => unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[..idx]) },
        None => name,
    };

    let mut out = OsString::with_capacity(stem.len() + 1 + WEBP_EXTENSION.len());
    out.push(stem);
    out.push(".");
    out.push(WEBP_EXTENSION);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_lowercase_suffixes() {
        assert_eq!(SourceFormat::from_file_name("a.png"), Some(SourceFormat::Png));
        assert_eq!(SourceFormat::from_file_name("b.jpg"), Some(SourceFormat::Jpg));
        assert_eq!(SourceFormat::from_file_name("c.gif"), None);
        assert_eq!(SourceFormat::from_file_name("notes.txt"), None);
    }

    #[test]
    fn skips_variants_that_are_not_normalised() {
        for name in ["A.PNG", "b.JPG", "c.jpeg", "d.Png", "e.png.bak", "png"] {
            assert_eq!(SourceFormat::from_file_name(name), None, "{name}");
        }
    }

    #[test]
    fn suffix_alone_still_matches() {
        assert_eq!(SourceFormat::from_file_name(".png"), Some(SourceFormat::Png));
    }

    #[test]
    fn splits_on_last_dot_only() {
        assert_eq!(webp_file_name(OsStr::new("photo.v2.png")), "photo.v2.webp");
        assert_eq!(webp_file_name(OsStr::new("a.png")), "a.webp");
        assert_eq!(webp_file_name(OsStr::new("b.jpg")), "b.webp");
        assert_eq!(webp_file_name(OsStr::new(".png")), ".webp");
        assert_eq!(webp_file_name(OsStr::new("README")), "README.webp");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_match_and_keep_their_stem() {
        use std::os::unix::ffi::OsStrExt;
        let name = OsStr::from_bytes(b"caf\xe9.png");
        assert_eq!(SourceFormat::from_os_name(name), Some(SourceFormat::Png));
        assert_eq!(webp_file_name(name).as_bytes(), b"caf\xe9.webp");

        let upper = OsStr::from_bytes(b"caf\xe9.PNG");
        assert_eq!(SourceFormat::from_os_name(upper), None);
    }
}
