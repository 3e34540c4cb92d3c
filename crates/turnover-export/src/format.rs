//! Output format selection and destination-path rules.

use std::path::{Path, PathBuf};

/// Container format selector for the written file.
///
/// `Other` is the escape hatch: the destination path is used verbatim and
/// no extension is inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Otio,
    Edl,
    Fcpxml,
    Aaf,
    Kdenlive,
    Other,
}

impl ExportFormat {
    /// Lowercase format tag, doubling as the inferred file extension.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Otio => "otio",
            Self::Edl => "edl",
            Self::Fcpxml => "fcpxml",
            Self::Aaf => "aaf",
            Self::Kdenlive => "kdenlive",
            Self::Other => "other",
        }
    }

    /// Parse a tag (case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "otio" => Some(Self::Otio),
            "edl" => Some(Self::Edl),
            "fcpxml" => Some(Self::Fcpxml),
            "aaf" => Some(Self::Aaf),
            "kdenlive" => Some(Self::Kdenlive),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Apply the destination naming rule: if the user-given path has no
/// extension and the format is not `Other`, append the format tag as the
/// extension; otherwise use the path verbatim.
pub fn resolve_output_path(path: &Path, format: ExportFormat) -> PathBuf {
    if path.extension().is_none() && format != ExportFormat::Other {
        path.with_extension(format.tag())
    } else {
        path.to_path_buf()
    }
}
