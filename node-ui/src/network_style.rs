//! Per-chain look of the application.
//!
//! Every chain but mainnet gets a recoloured application icon and a title suffix so that
//! windows of different chains can be told apart at a glance.

use ::image::RgbaImage;
use bitcoin::Network;

use crate::icon::{Icon, RenderError, Size};

pub const APP_NAME: &str = "Bitcoin Node";

/// Resolution the tinted application icon is rendered at before being rescaled on request.
const TINTED_ICON_SIZE: Size = Size::square(256);

pub trait NetworkStyle: Send + Sync {
    fn app_icon(&self) -> Icon;

    fn app_name(&self) -> &str {
        APP_NAME
    }

    /// Text appended to window titles, if any.
    fn title_add_text(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    /// Hue rotation in degrees.
    pub hue_shift: i32,
    /// Saturation reduction on a 0-255 scale.
    pub saturation_reduction: i32,
}

impl Tint {
    pub const NONE: Tint = Tint {
        hue_shift: 0,
        saturation_reduction: 0,
    };

    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Testnet | Network::Testnet4 => Tint {
                hue_shift: 70,
                saturation_reduction: 30,
            },
            Network::Signet => Tint {
                hue_shift: 35,
                saturation_reduction: 15,
            },
            Network::Regtest => Tint {
                hue_shift: 160,
                saturation_reduction: 30,
            },
            _ => Tint::NONE,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Tint::NONE
    }

    /// Recolour every visible pixel of the image in place.
    pub fn apply(&self, image: &mut RgbaImage) {
        if self.is_none() {
            return;
        }
        for pixel in image.pixels_mut() {
            if pixel[3] == 0 {
                continue;
            }
            let (h, s, l) = rgb_to_hsl(pixel[0], pixel[1], pixel[2]);
            let h = (h + self.hue_shift as f32).rem_euclid(360.0);
            let s = (s - self.saturation_reduction as f32 / 255.0).max(0.0);
            let (r, g, b) = hsl_to_rgb(h, s, l);
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        }
    }
}

/// Network style of a bitcoin chain.
#[derive(Debug, Clone)]
pub struct ChainStyle {
    network: Network,
    app_icon: Icon,
    title_add_text: Option<String>,
}

impl ChainStyle {
    pub fn new(network: Network) -> Result<Self, RenderError> {
        let tint = Tint::for_network(network);
        let app_icon = if tint.is_none() {
            crate::image::app_icon()
        } else {
            let mut rendered = crate::image::app_icon().pixmap(TINTED_ICON_SIZE)?.into_image();
            tint.apply(&mut rendered);
            Icon::from_rgba(rendered)
        };
        let title_add_text = if network == Network::Bitcoin {
            None
        } else {
            Some(format!("[{}]", network))
        };
        Ok(Self {
            network,
            app_icon,
            title_add_text,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

impl NetworkStyle for ChainStyle {
    fn app_icon(&self) -> Icon {
        self.app_icon.clone()
    }

    fn title_add_text(&self) -> Option<&str> {
        self.title_add_text.as_deref()
    }
}

/// Hue in degrees, saturation and lightness in [0, 1].
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d == 0.0 {
        return (0.0, 0.0, l);
    }
    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / d + 2.0)
    } else {
        60.0 * ((r - g) / d + 4.0)
    };
    (h, s.min(1.0), l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::Rgba;

    #[test]
    fn hsl_round_trip() {
        for (r, g, b) in [
            (247, 147, 26),
            (0, 0, 0),
            (255, 255, 255),
            (12, 200, 90),
            (80, 80, 80),
            (30, 60, 240),
        ] {
            let (h, s, l) = rgb_to_hsl(r, g, b);
            let (r2, g2, b2) = hsl_to_rgb(h, s, l);
            assert!((r as i32 - r2 as i32).abs() <= 1, "{:?}", (r, g, b));
            assert!((g as i32 - g2 as i32).abs() <= 1, "{:?}", (r, g, b));
            assert!((b as i32 - b2 as i32).abs() <= 1, "{:?}", (r, g, b));
        }
    }

    #[test]
    fn tint_skips_transparent_and_grey_pixels() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([247, 147, 26, 0]));
        img.put_pixel(1, 0, Rgba([80, 80, 80, 255]));
        Tint::for_network(Network::Regtest).apply(&mut img);
        assert_eq!(img.get_pixel(0, 0), &Rgba([247, 147, 26, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgba([80, 80, 80, 255]));
    }

    #[test]
    fn tint_rotates_hue() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255]));
        Tint {
            hue_shift: 120,
            saturation_reduction: 0,
        }
        .apply(&mut img);
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn mainnet_style() {
        let style = ChainStyle::new(Network::Bitcoin).unwrap();
        assert_eq!(style.title_add_text(), None);
        assert_eq!(style.app_name(), APP_NAME);
        assert!(matches!(style.app_icon(), Icon::Svg(_)));

        let size = Size::square(64);
        assert_eq!(
            style.app_icon().pixmap(size).unwrap(),
            crate::image::app_icon().pixmap(size).unwrap()
        );
    }

    #[test]
    fn test_chains_style() {
        assert_eq!(
            ChainStyle::new(Network::Testnet).unwrap().title_add_text(),
            Some("[testnet]")
        );
        assert_eq!(
            ChainStyle::new(Network::Signet).unwrap().title_add_text(),
            Some("[signet]")
        );
        assert_eq!(Tint::for_network(Network::Bitcoin), Tint::NONE);
        assert_eq!(
            Tint::for_network(Network::Testnet4),
            Tint::for_network(Network::Testnet)
        );
    }

    #[test]
    fn regtest_icon_is_recoloured() {
        let style = ChainStyle::new(Network::Regtest).unwrap();
        assert_eq!(style.network(), Network::Regtest);
        assert_eq!(style.title_add_text(), Some("[regtest]"));
        assert!(matches!(style.app_icon(), Icon::Raster(_)));

        let size = TINTED_ICON_SIZE;
        let tinted = style.app_icon().pixmap(size).unwrap();
        let original = crate::image::app_icon().pixmap(size).unwrap();
        assert_eq!(tinted.size(), size);

        // Corners lie outside of the round logo.
        assert_eq!(tinted.as_image().get_pixel(0, 0)[3], 0);
        // A point on the orange disc, away from the white glyph.
        let (x, y) = (128, 20);
        let before = original.as_image().get_pixel(x, y);
        let after = tinted.as_image().get_pixel(x, y);
        assert_eq!(before[3], after[3]);
        assert_ne!(before, after);
    }
}
