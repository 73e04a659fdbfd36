//! Window listing every icon the image provider knows about.

use iced::{
    alignment,
    widget::{button, column, container, image, row, scrollable, text, Column, Row},
    Element, Length, Task,
};
use node_ui::{AppMode, ImageProvider, Size};

pub const MIN_ICON_SIZE: i32 = 16;
pub const MAX_ICON_SIZE: i32 = 128;
const ICON_SIZE_STEP: i32 = 8;
const DEFAULT_ICON_SIZE: i32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Grow,
    Shrink,
}

struct Tile {
    id: &'static str,
    handle: Option<image::Handle>,
}

pub struct Gallery {
    provider: ImageProvider,
    app_mode: AppMode,
    title: String,
    icon_size: i32,
    tiles: Vec<Tile>,
}

impl Gallery {
    pub fn new(provider: ImageProvider, app_mode: AppMode, title: String) -> (Self, Task<Message>) {
        let mut gallery = Self {
            provider,
            app_mode,
            title,
            icon_size: DEFAULT_ICON_SIZE,
            tiles: Vec::new(),
        };
        gallery.render_tiles();
        (gallery, Task::none())
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn icon_size(&self) -> i32 {
        self.icon_size
    }

    fn render_tiles(&mut self) {
        let size = Size::square(self.icon_size);
        self.tiles = self
            .provider
            .ids()
            .map(|id| Tile {
                id,
                handle: self.provider.resolve(id, size).map(|bitmap| bitmap.handle()),
            })
            .collect();
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let icon_size = match message {
            Message::Grow => (self.icon_size + ICON_SIZE_STEP).min(MAX_ICON_SIZE),
            Message::Shrink => (self.icon_size - ICON_SIZE_STEP).max(MIN_ICON_SIZE),
        };
        if icon_size != self.icon_size {
            tracing::debug!("Icon size changed to {}", icon_size);
            self.icon_size = icon_size;
            self.render_tiles();
        }
        Task::none()
    }

    fn tiles_per_row(&self) -> usize {
        if self.app_mode.is_mobile() {
            2
        } else {
            5
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let wallet = if self.app_mode.wallet_enabled() {
            "wallet enabled"
        } else {
            "wallet disabled"
        };
        let header = row![
            text(format!("{} - {}", self.app_mode.state(), wallet)).width(Length::Fill),
            button(text("-")).on_press_maybe(
                (self.icon_size > MIN_ICON_SIZE).then_some(Message::Shrink)
            ),
            text(format!("{}px", self.icon_size)),
            button(text("+"))
                .on_press_maybe((self.icon_size < MAX_ICON_SIZE).then_some(Message::Grow)),
        ]
        .spacing(10)
        .align_y(alignment::Vertical::Center);

        let side = self.icon_size as f32;
        let grid = self
            .tiles
            .chunks(self.tiles_per_row())
            .fold(Column::new().spacing(20), |grid, chunk| {
                grid.push(chunk.iter().fold(Row::new().spacing(20), |row, tile| {
                    let picture: Element<'_, Message> = match &tile.handle {
                        Some(handle) => image(handle.clone()).width(side).height(side).into(),
                        None => container(text("?")).width(side).height(side).into(),
                    };
                    row.push(
                        column![picture, text(tile.id).size(12)]
                            .spacing(5)
                            .width(Length::Fixed(160.0))
                            .align_x(alignment::Horizontal::Center),
                    )
                }))
            });

        container(column![header, scrollable(grid)].spacing(20))
            .padding(20)
            .into()
    }
}
