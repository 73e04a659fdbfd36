#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};

use node_ui::{AppMode, Bitmap, NetworkStyle};
use tracing::warn;

pub const APP_ID: &str = "NodeGui";

/// Create iced application Settings.
pub fn create_app_settings(app_id: &str) -> Settings {
    Settings {
        id: Some(app_id.to_string()),
        antialiasing: true,
        ..Default::default()
    }
}

/// Initial and minimum window sizes for the application mode.
pub fn window_sizes(app_mode: &AppMode) -> (Size, Size) {
    if app_mode.is_mobile() {
        (Size::new(420.0, 860.0), Size::new(320.0, 560.0))
    } else {
        (Size::new(1200.0, 760.0), Size::new(1000.0, 650.0))
    }
}

/// Window title of the network style.
pub fn window_title(style: &dyn NetworkStyle) -> String {
    match style.title_add_text() {
        Some(suffix) => format!("{} {}", style.app_name(), suffix),
        None => style.app_name().to_string(),
    }
}

/// Create iced window Settings.
#[allow(unused_mut)]
pub fn create_window_settings(
    app_id: &str,
    app_mode: &AppMode,
    app_icon: Option<Bitmap>,
) -> iced::window::Settings {
    let (size, min_size) = window_sizes(app_mode);
    let icon = app_icon.and_then(|bitmap| match bitmap.window_icon() {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!("Invalid window icon: {}", e);
            None
        }
    });

    let mut window_settings = iced::window::Settings {
        size,
        icon,
        position: iced::window::Position::Default,
        min_size: Some(min_size),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: app_id.to_string(),
            ..Default::default()
        };
    }
    #[cfg(not(target_os = "linux"))]
    let _ = app_id;

    window_settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::Network;
    use node_ui::{ChainStyle, Mode, Size as IconSize};

    #[test]
    fn titles() {
        let style = ChainStyle::new(Network::Bitcoin).unwrap();
        assert_eq!(window_title(&style), "Bitcoin Node");
        let style = ChainStyle::new(Network::Regtest).unwrap();
        assert_eq!(window_title(&style), "Bitcoin Node [regtest]");
    }

    #[test]
    fn window_icon_from_provider() {
        let provider = node_ui::ImageProvider::new(std::sync::Arc::new(
            ChainStyle::new(Network::Signet).unwrap(),
        ));
        assert_eq!(
            window_title(provider.network_style()),
            "Bitcoin Node [signet]"
        );
        let mode = AppMode::new(Mode::Desktop, true);
        let settings =
            create_window_settings(APP_ID, &mode, provider.resolve("app", IconSize::square(64)));
        assert!(settings.icon.is_some());
        assert!(create_window_settings(APP_ID, &mode, None).icon.is_none());
    }

    #[test]
    fn mobile_window_is_narrow() {
        let (mobile, _) = window_sizes(&AppMode::new(Mode::Mobile, true));
        let (desktop, desktop_min) = window_sizes(&AppMode::new(Mode::Desktop, true));
        assert!(mobile.width < mobile.height);
        assert!(desktop.width > desktop.height);
        assert!(desktop.width >= desktop_min.width);
    }
}
