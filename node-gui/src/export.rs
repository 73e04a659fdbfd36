use std::{fmt, path::Path};

use node_ui::{icon::RenderError, ImageProvider, Size};
use tracing::{info, warn};

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Render(String, RenderError),
    InvalidSize(u32),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Export directory error: {}", e),
            Self::Render(id, e) => write!(f, "Failed to export icon '{}': {}", id, e),
            Self::InvalidSize(s) => write!(f, "Invalid icon size: {}", s),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> ExportError {
        ExportError::Io(e)
    }
}

/// Render every known icon as `<id>.png` into `directory`, returns the number of files
/// written. Identifiers the provider cannot render are skipped.
pub fn export_icons(
    provider: &ImageProvider,
    directory: &Path,
    icon_size: u32,
) -> Result<usize, ExportError> {
    let side = i32::try_from(icon_size)
        .ok()
        .filter(|s| *s > 0)
        .ok_or(ExportError::InvalidSize(icon_size))?;
    let size = Size::square(side);

    std::fs::create_dir_all(directory)?;

    let mut written = 0;
    for id in provider.ids() {
        let Some(bitmap) = provider.resolve(id, size) else {
            warn!("Icon '{}' could not be rendered, skipping", id);
            continue;
        };
        let path = directory.join(format!("{}.png", id));
        bitmap
            .save_png(&path)
            .map_err(|e| ExportError::Render(id.to_string(), e))?;
        written += 1;
    }

    info!(
        "Exported {} icons of {} to {}",
        written,
        size,
        directory.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::Network;
    use node_ui::ChainStyle;
    use std::sync::Arc;

    #[test]
    fn export_every_icon() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("icons");
        let provider = ImageProvider::new(Arc::new(ChainStyle::new(Network::Signet).unwrap()));

        let written = export_icons(&provider, &out, 24).unwrap();
        assert_eq!(written, provider.ids().count());
        for id in provider.ids() {
            assert!(out.join(format!("{}.png", id)).exists(), "{}", id);
        }
    }

    #[test]
    fn export_oversized_icons_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let provider = ImageProvider::new(Arc::new(ChainStyle::new(Network::Regtest).unwrap()));
        assert_eq!(
            export_icons(&provider, tmp.path(), i32::MAX as u32).unwrap(),
            0
        );
    }

    #[test]
    fn export_invalid_size() {
        let tmp = tempfile::tempdir().unwrap();
        let provider = ImageProvider::new(Arc::new(ChainStyle::new(Network::Bitcoin).unwrap()));
        assert!(matches!(
            export_icons(&provider, tmp.path(), 0),
            Err(ExportError::InvalidSize(0))
        ));
    }
}
