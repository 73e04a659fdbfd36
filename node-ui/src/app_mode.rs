use std::{fmt, str::FromStr};

/// Form factor the application runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Desktop,
    Mobile,
}

impl Mode {
    /// Mobile on phone operating systems, desktop everywhere else.
    pub fn platform_default() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            Mode::Mobile
        } else {
            Mode::Desktop
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Desktop => write!(f, "desktop"),
            Self::Mobile => write!(f, "mobile"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            _ => Err(format!("unknown application mode '{}'", s)),
        }
    }
}

/// Application mode as seen by the views.
///
/// Built once at startup and never mutated afterwards, views read its properties on every
/// render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppMode {
    mode: Mode,
    wallet_enabled: bool,
}

impl AppMode {
    pub fn new(mode: Mode, wallet_enabled: bool) -> Self {
        Self {
            mode,
            wallet_enabled,
        }
    }

    /// Resolve the launch-time choice: an explicit mode wins over the platform default and
    /// the wallet stays enabled unless it was disabled at launch.
    pub fn from_launch(mode: Option<Mode>, disable_wallet: bool) -> Self {
        Self::new(mode.unwrap_or_else(Mode::platform_default), !disable_wallet)
    }

    pub fn is_desktop(&self) -> bool {
        self.mode == Mode::Desktop
    }

    pub fn is_mobile(&self) -> bool {
        self.mode == Mode::Mobile
    }

    pub fn wallet_enabled(&self) -> bool {
        self.wallet_enabled
    }

    pub fn state(&self) -> &'static str {
        match self.mode {
            Mode::Mobile => "MOBILE",
            Mode::Desktop => "DESKTOP",
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_with_wallet() {
        let app_mode = AppMode::new(Mode::Mobile, true);
        assert!(app_mode.is_mobile());
        assert!(!app_mode.is_desktop());
        assert!(app_mode.wallet_enabled());
        assert_eq!(app_mode.state(), "MOBILE");
        assert_eq!(app_mode.mode(), Mode::Mobile);
    }

    #[test]
    fn projections_are_exclusive() {
        for mode in [Mode::Desktop, Mode::Mobile] {
            for wallet_enabled in [true, false] {
                let app_mode = AppMode::new(mode, wallet_enabled);
                assert_ne!(app_mode.is_desktop(), app_mode.is_mobile());
                assert_eq!(app_mode.wallet_enabled(), wallet_enabled);
                assert_eq!(
                    app_mode.state(),
                    if mode == Mode::Desktop {
                        "DESKTOP"
                    } else {
                        "MOBILE"
                    }
                );
            }
        }
    }

    #[test]
    fn launch_choice() {
        let app_mode = AppMode::from_launch(Some(Mode::Mobile), true);
        assert!(app_mode.is_mobile());
        assert!(!app_mode.wallet_enabled());

        let app_mode = AppMode::from_launch(None, false);
        assert_eq!(app_mode.mode(), Mode::platform_default());
        assert!(app_mode.wallet_enabled());
    }

    #[test]
    fn parse_mode() {
        assert_eq!(Mode::from_str("desktop"), Ok(Mode::Desktop));
        assert_eq!(Mode::from_str("Mobile"), Ok(Mode::Mobile));
        assert!(Mode::from_str("tablet").is_err());
        assert_eq!(Mode::Mobile.to_string(), "mobile");
    }
}
