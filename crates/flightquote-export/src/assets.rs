//! Static image assets: company logo, footer band and airline logos.
//!
//! Every lookup returns a `Result`/`Option`; callers pick the text fallback
//! when an image is unavailable. A missing asset never aborts a document.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::warn;

use crate::canvas::Rect;
use crate::error::AssetError;

const LOGO_FILE: &str = "logo.png";
const FOOTER_FILE: &str = "footer.png";
const AIRLINE_LOGO_DIR: &str = "airline-logos";

/// Known airline names and their logo files under `airline-logos/`.
/// Matching is exact: the booking form submits these names verbatim.
pub const AIRLINE_LOGOS: &[(&str, &str)] = &[
    ("Jazeera", "jazeera.png"),
    ("Air India Express", "air-india-express.png"),
    ("IndiGo", "indigo.png"),
    ("Emirates", "emirates.png"),
    ("Qatar Airways", "qatar-airways.png"),
];

pub fn airline_logo_file(airline: &str) -> Option<&'static str> {
    AIRLINE_LOGOS
        .iter()
        .find(|(name, _)| *name == airline)
        .map(|(_, file)| *file)
}

/// A decoded image, flattened to opaque 8-bit RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    /// File name, used for logging and by the recording canvas.
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl ImageAsset {
    /// Decode PNG/JPEG bytes. Transparent pixels are composited onto white,
    /// since the page background is white and PDF RGB images carry no alpha.
    pub fn decode(name: &str, bytes: &[u8]) -> Result<Self, AssetError> {
        let decode_err = |reason: String| AssetError::Decode {
            path: name.to_string(),
            reason,
        };
        let image = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| decode_err(e.to_string()))?
            .decode()
            .map_err(|e| decode_err(e.to_string()))?;

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(decode_err("image has no pixels".to_string()));
        }

        let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            let alpha = a as u16;
            for channel in [r, g, b] {
                let blended = (channel as u16 * alpha + 255 * (255 - alpha)) / 255;
                rgb.push(blended as u8);
            }
        }

        Ok(Self {
            name: name.to_string(),
            width,
            height,
            rgb,
        })
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Largest frame with this image's aspect ratio that fits inside
    /// `bounds`, centered in it.
    pub fn fit_within(&self, bounds: Rect) -> Rect {
        let aspect = self.aspect_ratio();
        let (width, height) = if bounds.width / bounds.height.max(f32::EPSILON) > aspect {
            (bounds.height * aspect, bounds.height)
        } else {
            (bounds.width, bounds.width / aspect)
        };
        Rect::new(
            bounds.x + (bounds.width - width) / 2.0,
            bounds.y + (bounds.height - height) / 2.0,
            width,
            height,
        )
    }
}

/// Asset directory resolved once at start-up; read-only afterwards.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn logo_path(&self) -> PathBuf {
        self.root.join(LOGO_FILE)
    }

    pub fn footer_path(&self) -> PathBuf {
        self.root.join(FOOTER_FILE)
    }

    /// `None` for airlines without a registered logo.
    pub fn airline_logo_path(&self, airline: &str) -> Option<PathBuf> {
        airline_logo_file(airline).map(|file| self.root.join(AIRLINE_LOGO_DIR).join(file))
    }

    pub fn load(&self, path: &Path) -> Result<ImageAsset, AssetError> {
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        ImageAsset::decode(&name, &bytes)
    }
}

/// Per-document memo of decoded images, so chrome repeated on every page
/// reads and decodes each file once. Failures are remembered and logged
/// once as well.
pub struct ImageCache<'a> {
    store: &'a AssetStore,
    loaded: RefCell<HashMap<PathBuf, Option<Rc<ImageAsset>>>>,
}

impl<'a> ImageCache<'a> {
    pub fn new(store: &'a AssetStore) -> Self {
        Self {
            store,
            loaded: RefCell::new(HashMap::new()),
        }
    }

    pub fn logo(&self) -> Option<Rc<ImageAsset>> {
        self.get(&self.store.logo_path())
    }

    pub fn footer(&self) -> Option<Rc<ImageAsset>> {
        self.get(&self.store.footer_path())
    }

    pub fn airline_logo(&self, airline: &str) -> Option<Rc<ImageAsset>> {
        let path = self.store.airline_logo_path(airline)?;
        self.get(&path)
    }

    fn get(&self, path: &Path) -> Option<Rc<ImageAsset>> {
        if let Some(cached) = self.loaded.borrow().get(path) {
            return cached.clone();
        }

        let loaded = match self.store.load(path) {
            Ok(image) => Some(Rc::new(image)),
            Err(e) => {
                warn!("image unavailable, using text fallback: {e}");
                None
            }
        };
        self.loaded
            .borrow_mut()
            .insert(path.to_path_buf(), loaded.clone());
        loaded
    }
}
