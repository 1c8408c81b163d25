use iced::alignment::Horizontal;
use iced::mouse;
use iced::widget::image::Handle;
use iced::widget::{
    button, canvas, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
    Space,
};
use iced::{Color, Element, Length};

use crate::config::SiteConfig;
use crate::state::lightbox::{ClickTarget, Lightbox};
use crate::ui::canvas::PhotoView;
use crate::Message;

/// Full-window layer that swallows pointer input (including the wheel)
/// so the page underneath cannot scroll.
pub fn scroll_blocker<'a>() -> Element<'a, Message> {
    opaque(Space::new(Length::Fill, Length::Fill))
}

/// Wraps chrome so presses on it are consumed instead of reaching the
/// backdrop.
fn chrome<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    mouse_area(content)
        .on_press(Message::LightboxClicked(ClickTarget::Chrome))
        .interaction(mouse::Interaction::Idle)
        .into()
}

fn chrome_button<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(text(label).size(22).color(Color::WHITE))
        .on_press(message)
        .padding([6, 14])
        .style(button::text)
        .into()
}

/// The open lightbox, or `None` while closed
pub fn lightbox<'a>(lightbox: &'a Lightbox, config: &'a SiteConfig) -> Option<Element<'a, Message>> {
    let index = lightbox.selected_index()?;
    let photo = lightbox.current()?;
    let total = lightbox.catalog().len();

    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.88).into()),
                ..container::Style::default()
            }),
    )
    .on_press(Message::LightboxClicked(ClickTarget::Backdrop));

    let top = row![
        text(counter(index, total)).size(14).color(Color::WHITE),
        horizontal_space(),
        chrome_button("✕", Message::CloseLightbox),
    ];

    // Boundaries wrap, so both arrows are always enabled
    let bottom = row![
        chrome_button("‹", Message::PreviousPhoto),
        container(text(&photo.caption).size(15).color(Color::WHITE))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        chrome_button("›", Message::NextPhoto),
    ];

    let view = canvas(PhotoView {
        handle: Handle::from_path(config.photo_path(&photo.source)),
        transform: *lightbox.transform(),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let panel = column![chrome(top), view, chrome(bottom)]
        .spacing(12)
        .max_width(1200);

    let layer = container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(32)
        .align_x(Horizontal::Center);

    Some(stack![backdrop, layer].into())
}

/// "3 / 7"
pub fn counter(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_is_one_based() {
        assert_eq!(counter(0, 7), "1 / 7");
        assert_eq!(counter(6, 7), "7 / 7");
    }
}
