use std::{collections::HashMap, sync::Arc};

use tracing::{debug, warn};

use crate::{
    icon::{Bitmap, Icon, Size},
    network_style::NetworkStyle,
};

const APP_ICON: &[u8] = include_bytes!("../static/icons/app.svg");
const ARROW_DOWN_ICON: &[u8] = include_bytes!("../static/icons/arrow-down.svg");
const ARROW_UP_ICON: &[u8] = include_bytes!("../static/icons/arrow-up.svg");
const BITCOIN_CIRCLE_ICON: &[u8] = include_bytes!("../static/icons/bitcoin-circle.svg");
const BLOCKCLOCK_SIZE_COMPACT_ICON: &[u8] =
    include_bytes!("../static/icons/blockclock-size-compact.svg");
const BLOCKCLOCK_SIZE_SHOWCASE_ICON: &[u8] =
    include_bytes!("../static/icons/blockclock-size-showcase.svg");
const BLOCKTIME_DARK_ICON: &[u8] = include_bytes!("../static/icons/blocktime-dark.svg");
const BLOCKTIME_LIGHT_ICON: &[u8] = include_bytes!("../static/icons/blocktime-light.svg");
const CARET_LEFT_ICON: &[u8] = include_bytes!("../static/icons/caret-left.svg");
const CARET_RIGHT_ICON: &[u8] = include_bytes!("../static/icons/caret-right.svg");
const CHECK_ICON: &[u8] = include_bytes!("../static/icons/check.svg");
const CROSS_ICON: &[u8] = include_bytes!("../static/icons/cross.svg");
const EXPORT_ICON: &[u8] = include_bytes!("../static/icons/export.svg");
const GEAR_ICON: &[u8] = include_bytes!("../static/icons/gear.svg");
const INFO_ICON: &[u8] = include_bytes!("../static/icons/info.svg");
const NETWORK_DARK_ICON: &[u8] = include_bytes!("../static/icons/network-dark.svg");
const NETWORK_LIGHT_ICON: &[u8] = include_bytes!("../static/icons/network-light.svg");
const SHUTDOWN_ICON: &[u8] = include_bytes!("../static/icons/shutdown.svg");
const STORAGE_DARK_ICON: &[u8] = include_bytes!("../static/icons/storage-dark.svg");
const STORAGE_LIGHT_ICON: &[u8] = include_bytes!("../static/icons/storage-light.svg");

pub fn app_icon() -> Icon {
    Icon::from_svg(APP_ICON)
}

/// Where the pixels of an identifier come from.
#[derive(Debug, Clone, Copy)]
pub enum IconSource {
    /// Compiled-in svg resource.
    Resource(&'static [u8]),
    /// Application icon of the active network style.
    AppIcon,
}

/// Every identifier the views may request.
pub static ICONS: [(&str, IconSource); 20] = [
    ("arrow-down", IconSource::Resource(ARROW_DOWN_ICON)),
    ("arrow-up", IconSource::Resource(ARROW_UP_ICON)),
    ("bitcoin-circle", IconSource::Resource(BITCOIN_CIRCLE_ICON)),
    (
        "blockclock-size-compact",
        IconSource::Resource(BLOCKCLOCK_SIZE_COMPACT_ICON),
    ),
    (
        "blockclock-size-showcase",
        IconSource::Resource(BLOCKCLOCK_SIZE_SHOWCASE_ICON),
    ),
    ("blocktime-dark", IconSource::Resource(BLOCKTIME_DARK_ICON)),
    ("blocktime-light", IconSource::Resource(BLOCKTIME_LIGHT_ICON)),
    ("app", IconSource::AppIcon),
    ("caret-left", IconSource::Resource(CARET_LEFT_ICON)),
    ("caret-right", IconSource::Resource(CARET_RIGHT_ICON)),
    ("check", IconSource::Resource(CHECK_ICON)),
    ("cross", IconSource::Resource(CROSS_ICON)),
    ("export", IconSource::Resource(EXPORT_ICON)),
    ("gear", IconSource::Resource(GEAR_ICON)),
    ("info", IconSource::Resource(INFO_ICON)),
    ("network-dark", IconSource::Resource(NETWORK_DARK_ICON)),
    ("network-light", IconSource::Resource(NETWORK_LIGHT_ICON)),
    ("shutdown", IconSource::Resource(SHUTDOWN_ICON)),
    ("storage-dark", IconSource::Resource(STORAGE_DARK_ICON)),
    ("storage-light", IconSource::Resource(STORAGE_LIGHT_ICON)),
];

/// Resolves icon identifiers to bitmaps for the views.
///
/// Lookups never fail loudly: an unknown identifier, an invalid size or a resource that
/// cannot be rendered all give `None`, and the view is expected to draw nothing in place.
pub struct ImageProvider {
    network_style: Arc<dyn NetworkStyle>,
    sources: HashMap<&'static str, IconSource>,
}

impl ImageProvider {
    pub fn new(network_style: Arc<dyn NetworkStyle>) -> Self {
        Self {
            network_style,
            sources: ICONS.iter().copied().collect(),
        }
    }

    /// Render `id` at `requested_size`.
    ///
    /// On success `size` is set to the requested size. It is left untouched otherwise, and
    /// nothing is rendered when the slot is missing.
    pub fn request_pixmap(
        &self,
        id: &str,
        size: Option<&mut Size>,
        requested_size: Size,
    ) -> Option<Bitmap> {
        let size = size?;
        if !requested_size.is_valid() {
            debug!("Invalid size {} requested for icon '{}'", requested_size, id);
            return None;
        }

        let Some(&source) = self.sources.get(id) else {
            debug!("No icon registered for '{}'", id);
            return None;
        };

        let icon = match source {
            IconSource::Resource(data) => Icon::from_svg(data),
            IconSource::AppIcon => self.network_style.app_icon(),
        };

        match icon.pixmap(requested_size) {
            Ok(bitmap) => {
                *size = requested_size;
                Some(bitmap)
            }
            Err(e) => {
                warn!("Failed to render icon '{}' at {}: {}", id, requested_size, e);
                None
            }
        }
    }

    pub fn resolve(&self, id: &str, requested_size: Size) -> Option<Bitmap> {
        let mut size = Size::default();
        self.request_pixmap(id, Some(&mut size), requested_size)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    /// Recognized identifiers, in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        ICONS.iter().map(|(id, _)| *id)
    }

    pub fn network_style(&self) -> &dyn NetworkStyle {
        self.network_style.as_ref()
    }
}
