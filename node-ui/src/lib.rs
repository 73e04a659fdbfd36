pub mod app_mode;
pub mod icon;
pub mod image;
pub mod network_style;

pub use crate::app_mode::{AppMode, Mode};
pub use crate::icon::{Bitmap, Icon, Size};
pub use crate::image::ImageProvider;
pub use crate::network_style::{ChainStyle, NetworkStyle};
