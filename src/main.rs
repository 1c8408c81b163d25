use iced::keyboard::{self, key};
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::{column, Stack};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod state;
mod ui;

use config::SiteConfig;
use state::catalog::{self, PhotoCatalog};
use state::contact::{self, CopyIndicator};
use state::gesture::{Input, NavKey};
use state::lightbox::{BackgroundScroll, ClickTarget, Lightbox};

/// Main application state
struct Showcase {
    /// Display-only facts about the property, fixed at startup
    config: SiteConfig,
    /// Shared gallery catalog
    catalog: Arc<PhotoCatalog>,
    /// The photo viewer; owns the selection and the live transform
    lightbox: Lightbox,
    /// Whether the page behind the lightbox may scroll
    scroll: BackgroundScroll,
    /// "Copied" confirmation next to the contact button
    copied: CopyIndicator,
    /// Current window width, used to place gallery jumps
    page_width: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery tile was pressed
    OpenPhoto(usize),
    CloseLightbox,
    NextPhoto,
    PreviousPhoto,
    /// Press somewhere on the lightbox overlay
    LightboxClicked(ClickTarget),
    /// Pointer, touch or wheel input on the lightbox photo
    Gesture(Input),
    /// Navigation key while the lightbox is open
    KeyPressed(NavKey),
    /// User pressed "Más información"
    CopyContact,
    /// Clipboard write finished
    ContactCopied(Result<(), String>),
    /// Indicator timer fired for the given copy generation
    CopiedExpired(u64),
    /// Gallery group button pressed
    JumpToGroup(usize),
    WindowResized(Size),
}

impl Showcase {
    /// Create a new instance of the application
    fn new(config: SiteConfig) -> (Self, Task<Message>) {
        let catalog = catalog::shared();
        let scroll = BackgroundScroll::global();

        tracing::info!(
            photos = catalog.len(),
            sections = catalog.sections().len(),
            photo_root = %config.photo_root.display(),
            "Showcase initialized"
        );

        (
            Showcase {
                config,
                lightbox: Lightbox::new(catalog.clone(), scroll.clone()),
                catalog,
                scroll,
                copied: CopyIndicator::default(),
                page_width: window::Settings::default().size.width,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenPhoto(index) => self.lightbox.open_at(index),
            Message::CloseLightbox => self.lightbox.close(),
            Message::NextPhoto => self.lightbox.next(),
            Message::PreviousPhoto => self.lightbox.previous(),
            Message::LightboxClicked(target) => self.lightbox.click(target),
            Message::Gesture(input) => self.lightbox.handle_input(input),
            Message::KeyPressed(key) => self.lightbox.handle_input(Input::Key(key)),
            Message::CopyContact => {
                return Task::perform(
                    contact::copy_to_clipboard(self.config.whatsapp_number.clone()),
                    Message::ContactCopied,
                );
            }
            Message::ContactCopied(Ok(())) => {
                let generation = self.copied.copied();
                return Task::perform(contact::dismiss_after(generation), Message::CopiedExpired);
            }
            Message::ContactCopied(Err(err)) => {
                // No confirmation is shown; nothing else to do
                tracing::debug!(error = %err, "Clipboard write failed");
            }
            Message::CopiedExpired(generation) => self.copied.expire(generation),
            Message::JumpToGroup(group) => {
                if let Some(y) = self.jump_offset(group) {
                    return scrollable::scroll_to(ui::page::page_id(), AbsoluteOffset { x: 0.0, y });
                }
            }
            Message::WindowResized(size) => self.page_width = size.width,
        }

        Task::none()
    }

    /// Where the page should scroll to show `group`; `None` while the
    /// background is locked or the group is unknown
    fn jump_offset(&self, group: usize) -> Option<f32> {
        if !self.scroll.is_enabled() {
            return None;
        }
        ui::page::group_offset(&self.catalog, group, self.page_width)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = iced::widget::scrollable(
            column![
                ui::page::header(&self.config),
                ui::page::hero(&self.config),
                ui::page::features(),
                ui::page::gallery(&self.catalog, &self.config),
                ui::page::services(&self.config),
                ui::page::location(&self.config),
                ui::page::reviews(),
                ui::page::closing(),
                ui::page::footer(&self.config),
            ]
            .width(Length::Fill),
        )
        .id(ui::page::page_id())
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(ui::page::contact(&self.config, &self.copied));

        if !self.scroll.is_enabled() {
            layers = layers.push(ui::overlay::scroll_blocker());
        }
        if let Some(overlay) = ui::overlay::lightbox(&self.lightbox, &self.config) {
            layers = layers.push(overlay);
        }

        layers.into()
    }

    /// Keyboard shortcuts exist only while the lightbox is open
    fn subscription(&self) -> Subscription<Message> {
        let resized = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        if self.lightbox.is_open() {
            Subscription::batch([resized, keyboard::on_key_press(nav_key)])
        } else {
            resized
        }
    }

    /// Window title
    fn title(&self) -> String {
        self.config.brand.clone()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn nav_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    let key = match key.as_ref() {
        keyboard::Key::Named(key::Named::ArrowLeft) => NavKey::ArrowLeft,
        keyboard::Key::Named(key::Named::ArrowRight) => NavKey::ArrowRight,
        keyboard::Key::Named(key::Named::Escape) => NavKey::Escape,
        _ => return None,
    };
    Some(Message::KeyPressed(key))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::load();

    iced::application(Showcase::title, Showcase::update, Showcase::view)
        .subscription(Showcase::subscription)
        .theme(Showcase::theme)
        .centered()
        .run_with(move || Showcase::new(config))
}
