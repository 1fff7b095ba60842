//! Font metrics backed by fontdue.
//!
//! Text is measured with per-glyph advance widths from real font files.
//! Bold and italic variants are used when they can be found; otherwise the
//! regular face measures everything.

use std::fs;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use lsb_common::{Component, Diagnostics};
use lsb_css::{FontStyle, FontWeight};
use lsb_layout::{ApproximateFontMetrics, FontMetrics, FontSpec};
use thiserror::Error;

/// Common system font paths to search for a default (regular) font.
const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
];

const FONT_BOLD_SEARCH_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

const FONT_ITALIC_SEARCH_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Italic.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Italic.ttf",
    "C:\\Windows\\Fonts\\ariali.ttf",
];

const FONT_BOLD_ITALIC_SEARCH_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold Italic.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-BoldOblique.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-BoldOblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-BoldItalic.ttf",
    "C:\\Windows\\Fonts\\arialbi.ttf",
];

/// Line height as a multiple of the font size when the font has no
/// horizontal line metrics.
const FALLBACK_LINE_HEIGHT_RATIO: f32 = 1.2;

/// A font file could not be used.
#[derive(Debug, Error)]
pub enum FontError {
    /// The file could not be read.
    #[error("failed to read font '{}': {source}", path.display())]
    Io {
        /// Font path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// fontdue rejected the file.
    #[error("invalid font '{}': {message}", path.display())]
    Invalid {
        /// Font path.
        path: PathBuf,
        /// fontdue's description of the problem.
        message: &'static str,
    },
}

/// Font metrics implementation backed by fontdue's per-glyph metrics.
pub struct FontdueFontMetrics {
    regular: Font,
    bold: Option<Font>,
    italic: Option<Font>,
    bold_italic: Option<Font>,
}

impl FontdueFontMetrics {
    /// Measure everything with a single face.
    #[must_use]
    pub fn from_font(regular: Font) -> Self {
        Self {
            regular,
            bold: None,
            italic: None,
            bold_italic: None,
        }
    }

    /// Load a single font file.
    ///
    /// # Errors
    ///
    /// Returns a [`FontError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let data = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|message| {
            FontError::Invalid {
                path: path.to_path_buf(),
                message,
            }
        })?;
        Ok(Self::from_font(font))
    }

    /// Search the usual system locations for a regular face and its
    /// variants. Returns `None` if no regular face is found.
    #[must_use]
    pub fn load_system() -> Option<Self> {
        let regular = load_font_from_paths(FONT_SEARCH_PATHS)?;
        Some(Self {
            regular,
            bold: load_font_from_paths(FONT_BOLD_SEARCH_PATHS),
            italic: load_font_from_paths(FONT_ITALIC_SEARCH_PATHS),
            bold_italic: load_font_from_paths(FONT_BOLD_ITALIC_SEARCH_PATHS),
        })
    }

    /// The best available face for a weight and style.
    fn select(&self, font: &FontSpec) -> &Font {
        let bold = font.weight == FontWeight::Bold;
        let italic = font.style == FontStyle::Italic;
        let variant = match (bold, italic) {
            (true, true) => self
                .bold_italic
                .as_ref()
                .or(self.bold.as_ref())
                .or(self.italic.as_ref()),
            (true, false) => self.bold.as_ref(),
            (false, true) => self.italic.as_ref(),
            (false, false) => None,
        };
        variant.unwrap_or(&self.regular)
    }
}

impl FontMetrics for FontdueFontMetrics {
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        let face = self.select(font);
        text.chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| face.metrics(ch, font.size).advance_width)
            .sum()
    }

    fn line_height(&self, font: &FontSpec) -> f32 {
        self.select(font)
            .horizontal_line_metrics(font.size)
            .map_or(font.size * FALLBACK_LINE_HEIGHT_RATIO, |metrics| {
                metrics.new_line_size
            })
    }
}

/// Try to load a font from a list of filesystem paths.
fn load_font_from_paths(paths: &[&str]) -> Option<Font> {
    paths.iter().find_map(|path| {
        let data = fs::read(path).ok()?;
        Font::from_bytes(data, FontSettings::default()).ok()
    })
}

/// Pick font metrics for a session: the given font file, else a system
/// font, else fixed-ratio approximations. Falling back is a warning.
pub fn load_metrics(font: Option<&Path>, diagnostics: &mut Diagnostics) -> Box<dyn FontMetrics> {
    if let Some(path) = font {
        match FontdueFontMetrics::from_file(path) {
            Ok(metrics) => return Box::new(metrics),
            Err(err) => diagnostics.warn(Component::Layout, err.to_string()),
        }
    }
    match FontdueFontMetrics::load_system() {
        Some(metrics) => Box::new(metrics),
        None => {
            diagnostics.warn(
                Component::Layout,
                "no system font found; using approximate text metrics",
            );
            Box::new(ApproximateFontMetrics)
        }
    }
}
