/// Landing page sections
///
/// Each function renders one block of the page from the site config and
/// the authored content. None of them hold state.
use chrono::Datelike;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, column, container, horizontal_space, image, row, scrollable, stack, text, Column, Row,
    Space,
};
use iced::{Border, Color, Element, Length, Theme};
use iced_aw::Wrap;

use crate::config::SiteConfig;
use crate::state::catalog::{PhotoCatalog, SectionView};
use crate::state::contact::CopyIndicator;
use crate::state::content::{self, Review, AMENITIES, FEATURES, NEARBY, REVIEWS};
use crate::Message;

pub const EMERALD_50: Color = Color::from_rgb(0.925, 0.992, 0.961);
pub const EMERALD_100: Color = Color::from_rgb(0.82, 0.98, 0.898);
pub const EMERALD_600: Color = Color::from_rgb(0.02, 0.588, 0.412);
pub const EMERALD_900: Color = Color::from_rgb(0.024, 0.306, 0.231);
pub const STONE_600: Color = Color::from_rgb(0.341, 0.325, 0.306);
pub const STONE_800: Color = Color::from_rgb(0.161, 0.145, 0.141);
const AMBER_500: Color = Color::from_rgb(0.961, 0.62, 0.043);

const MAX_WIDTH: f32 = 1100.0;
const SECTION_PADDING: [u16; 2] = [56, 16];
const HEADER_HEIGHT: f32 = 12.0 * 2.0 + 32.0;
const HERO_HEIGHT: f32 = 520.0;
const FEATURE_CARD: (f32, f32) = (340.0, 96.0);
const FEATURE_SPACING: f32 = 16.0;
const TILE: (f32, f32) = (320.0, 240.0);
const TILE_SPACING: f32 = 12.0;
const GALLERY_SPACING: f32 = 32.0;
/// iced's default line height, relative to the text size
const LINE_HEIGHT: f32 = 1.3;

const PAGE_SCROLLABLE_ID: &str = "page";

/// Id of the scrollable holding the whole page
pub fn page_id() -> scrollable::Id {
    scrollable::Id::new(PAGE_SCROLLABLE_ID)
}

/// White rounded card with a light emerald border
pub fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        border: Border {
            color: EMERALD_100,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

fn band_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(EMERALD_50.into()),
        ..container::Style::default()
    }
}

fn pill_style(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(background.into()),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Centered, width-limited block with vertical breathing room
fn section<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(container(content).max_width(MAX_WIDTH).padding(SECTION_PADDING))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn section_title<'a>(eyebrow: Option<&'a str>, title: &'a str, subtitle: Option<&'a str>) -> Column<'a, Message> {
    let mut block = Column::new().spacing(8);

    if let Some(eyebrow) = eyebrow {
        block = block.push(text(eyebrow.to_uppercase()).size(13).color(EMERALD_600));
    }
    block = block.push(text(title).size(28).color(STONE_800));
    if let Some(subtitle) = subtitle {
        block = block.push(text(subtitle).size(16).color(STONE_600));
    }

    block.push(Space::with_height(16))
}

fn bullet_list<'a>(items: impl IntoIterator<Item = String>) -> Column<'a, Message> {
    Column::with_children(items.into_iter().map(|item| text(format!("• {item}")).into())).spacing(8)
}

pub fn header(config: &SiteConfig) -> Element<'_, Message> {
    // Labels only; the page has no outbound links
    let nav = row!["Fotos", "Servicios", "Ubicación", "Reseñas"]
        .spacing(16)
        .align_y(Vertical::Center);

    container(
        row![
            container(Space::new(32, 32)).style(pill_style(EMERALD_600)),
            text(&config.brand).size(18),
            horizontal_space(),
            nav,
        ]
        .spacing(12)
        .align_y(Vertical::Center),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.85).into()),
        border: Border {
            color: EMERALD_100,
            width: 1.0,
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

pub fn hero(config: &SiteConfig) -> Element<'_, Message> {
    let chips = [&config.beds, &config.baths, &config.wifi, &config.capacity]
        .into_iter()
        .map(|value| {
            container(text(value).size(14).color(Color::WHITE))
                .padding([4, 12])
                .style(pill_style(Color::from_rgba(1.0, 1.0, 1.0, 0.15)))
                .into()
        })
        .collect::<Vec<_>>();

    let copy = column![
        text(&config.address_short).size(14).color(EMERALD_100),
        text("Tu descanso en Filandia").size(44).color(Color::WHITE),
        text("Dúplex con parqueadero privado, balcón con vista y todo lo necesario para desconectar en el Eje Cafetero.")
            .size(17)
            .color(Color::from_rgba(1.0, 1.0, 1.0, 0.9)),
        Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0),
    ]
    .spacing(12)
    .max_width(720);

    stack![
        image(config.photo_path(content::HERO_PHOTO))
            .content_fit(iced::ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill),
        container(Space::new(Length::Fill, Length::Fill)).style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.35).into()),
            ..container::Style::default()
        }),
        container(copy)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Bottom)
            .padding([64, 24]),
    ]
    .width(Length::Fill)
    .height(HERO_HEIGHT)
    .into()
}

pub fn features<'a>() -> Element<'a, Message> {
    let cards = FEATURES
        .iter()
        .map(|feature| {
            container(
                row![
                    text(feature.symbol).size(20),
                    column![
                        text(feature.title).size(16).color(STONE_800),
                        text(feature.desc).size(14).color(STONE_600),
                    ]
                    .spacing(4),
                ]
                .spacing(16),
            )
            .padding(16)
            .width(FEATURE_CARD.0)
            .height(FEATURE_CARD.1)
            .style(card_style)
            .into()
        })
        .collect::<Vec<_>>();

    section(column![
        section_title(
            Some("Confort + Ubicación"),
            "Detalles que hacen la diferencia",
            Some("Todo lo que necesitas para una estadía cómoda y memorable."),
        ),
        Wrap::with_elements(cards).spacing(FEATURE_SPACING).line_spacing(FEATURE_SPACING),
    ])
}

/// Grouped gallery; every tile opens the lightbox at its catalog slot
pub fn gallery<'a>(catalog: &'a PhotoCatalog, config: &'a SiteConfig) -> Element<'a, Message> {
    let jumps = Row::with_children(groups(catalog).into_iter().map(|(group, name)| {
        button(text(name).size(14))
            .on_press(Message::JumpToGroup(group))
            .padding([4, 12])
            .style(button::secondary)
            .into()
    }))
    .spacing(8);

    let mut body = Column::new()
        .spacing(GALLERY_SPACING)
        .push(section_title(
            Some("Explora"),
            "Galería de fotos",
            Some("Toca una foto para verla en grande."),
        ))
        .push(jumps);

    for view in catalog.sections() {
        let tiles = view
            .photos
            .iter()
            .filter_map(|photo| catalog.position_of(photo).map(|position| (position, photo)))
            .map(|(position, photo)| {
                column![
                    button(
                        image(config.photo_path(&photo.source))
                            .content_fit(iced::ContentFit::Cover)
                            .width(Length::Fill)
                            .height(Length::Fill),
                    )
                    .on_press(Message::OpenPhoto(position))
                    .padding(0)
                    .width(TILE.0)
                    .height(TILE.1)
                    .style(button::text),
                    text(&photo.caption).size(13).color(STONE_600),
                ]
                .spacing(6)
                .into()
            })
            .collect::<Vec<_>>();

        body = body.push(
            column![
                text(format!("{} · {}", view.group_name, view.title)).size(18).color(STONE_800),
                text(&view.description).size(14).color(STONE_600),
                Wrap::with_elements(tiles).spacing(TILE_SPACING).line_spacing(TILE_SPACING),
            ]
            .spacing(8),
        );
    }

    container(section(body))
        .style(band_style)
        .width(Length::Fill)
        .into()
}

/// Distinct gallery groups, in authored order
fn groups(catalog: &PhotoCatalog) -> Vec<(usize, &str)> {
    let mut groups: Vec<(usize, &str)> = Vec::new();
    for view in catalog.sections() {
        if groups.last().map(|(group, _)| *group) != Some(view.group) {
            groups.push((view.group, view.group_name.as_str()));
        }
    }
    groups
}

/// Vertical scroll offset of the first gallery section of `group` on a page
/// laid out `width` pixels wide, or `None` if the group has no section.
///
/// Follows the fixed sizes the page is built with. Text is assumed to fit
/// on one line.
pub fn group_offset(catalog: &PhotoCatalog, group: usize, width: f32) -> Option<f32> {
    let target = catalog.sections().iter().position(|view| view.group == group)?;
    let content = width.min(MAX_WIDTH) - 2.0 * f32::from(SECTION_PADDING[1]);
    let padding = f32::from(SECTION_PADDING[0]);
    let title = title_height();

    let features = 2.0 * padding
        + title
        + wrap_height(FEATURES.len(), FEATURE_CARD, FEATURE_SPACING, content);

    let gallery_head = padding + title + GALLERY_SPACING + line(14.0) + 8.0 + GALLERY_SPACING;
    let before: f32 = catalog.sections()[..target]
        .iter()
        .map(|view| section_height(view, content) + GALLERY_SPACING)
        .sum();

    Some(HEADER_HEIGHT + HERO_HEIGHT + features + gallery_head + before)
}

fn line(size: f32) -> f32 {
    size * LINE_HEIGHT
}

/// Eyebrow, title, subtitle and trailing space of `section_title`
fn title_height() -> f32 {
    line(13.0) + line(28.0) + line(16.0) + 16.0 + 3.0 * 8.0
}

fn section_height(view: &SectionView, content: f32) -> f32 {
    let tile = (TILE.0, TILE.1 + 6.0 + line(13.0));
    line(18.0) + line(14.0) + 2.0 * 8.0 + wrap_height(view.photos.len(), tile, TILE_SPACING, content)
}

/// Height of `count` equal items wrapped into rows of `width`
fn wrap_height(count: usize, item: (f32, f32), spacing: f32, width: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let per_row = (((width + spacing) / (item.0 + spacing)).floor() as usize).max(1);
    let rows = count.div_ceil(per_row) as f32;
    rows * item.1 + (rows - 1.0) * spacing
}

pub fn services(config: &SiteConfig) -> Element<'_, Message> {
    let facts = bullet_list([
        format!("Capacidad: {}", config.capacity),
        format!("Camas: {}", config.beds),
        format!("Baños: {}", config.baths),
        format!("Internet: {}", config.wifi),
    ]);

    let tiles = AMENITIES
        .iter()
        .map(|amenity| {
            container(row![text(amenity.symbol).size(18), text(amenity.label).size(15)].spacing(12))
                .padding(20)
                .width(200)
                .style(card_style)
                .into()
        })
        .collect::<Vec<_>>();

    section(
        row![
            column![
                section_title(None, "Un lugar pensado para descansar", None),
                text(content::ABOUT).size(16).color(STONE_600),
                facts,
            ]
            .spacing(16)
            .width(Length::FillPortion(1)),
            container(Wrap::with_elements(tiles).spacing(12.0).line_spacing(12.0))
                .width(Length::FillPortion(1)),
        ]
        .spacing(40),
    )
}

pub fn location(config: &SiteConfig) -> Element<'_, Message> {
    let map = container(
        column![
            text("🗺 Mapa").size(18),
            text(&config.map_embed_url).size(11).color(STONE_600),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::FillPortion(1))
    .style(card_style);

    let body = row![
        map,
        column![
            text(content::LOCATION_INTRO).size(16),
            bullet_list(NEARBY.iter().map(|place| place.to_string())),
        ]
        .spacing(12)
        .width(Length::FillPortion(1)),
    ]
    .spacing(24);

    container(section(column![
        section_title(
            Some("Ubicación"),
            "En el corazón del Quindío",
            Some("Cerca del mirador, cafés artesanales y restaurantes típicos."),
        ),
        body,
    ]))
    .style(band_style)
    .width(Length::Fill)
    .into()
}

fn review_card<'a>(review: &Review) -> Element<'a, Message> {
    container(
        column![
            text(review.star_row()).color(AMBER_500),
            text(format!("“{}”", review.text)).size(15).color(STONE_800),
            text(review.signature()).size(13).color(STONE_600),
        ]
        .spacing(10),
    )
    .padding(16)
    .width(Length::FillPortion(1))
    .style(card_style)
    .into()
}

pub fn reviews<'a>() -> Element<'a, Message> {
    section(column![
        section_title(Some("Opiniones"), "Nuestros huéspedes lo dicen", None),
        row(REVIEWS.iter().map(review_card)).spacing(16),
    ])
}

pub fn closing<'a>() -> Element<'a, Message> {
    section(
        column![
            text("Conoce tu próximo hospedaje en Filandia").size(28),
            text("Naturaleza, comodidad y una vista que enamora. Sin enlaces externos, información clara y transparente.")
                .color(STONE_600),
        ]
        .spacing(8)
        .align_x(Horizontal::Center)
        .width(Length::Fill),
    )
}

pub fn footer(config: &SiteConfig) -> Element<'_, Message> {
    container(
        row![
            text(copyright(&config.brand, chrono::Local::now().year())).size(14),
            horizontal_space(),
            text(format!("📍 {}", config.address_short)).size(14).color(STONE_600),
        ]
        .align_y(Vertical::Center),
    )
    .padding([32, 16])
    .width(Length::Fill)
    .into()
}

pub fn copyright(brand: &str, year: i32) -> String {
    format!("© {year} {brand}. Todos los derechos reservados.")
}

/// Floating "more info" widget: shows the number and copies it on press
pub fn contact<'a>(config: &'a SiteConfig, indicator: &CopyIndicator) -> Element<'a, Message> {
    let mut widget = column![
        button(row![text("📞"), text("Más información").size(14)].spacing(8))
            .on_press(Message::CopyContact)
            .padding([12, 16])
            .style(button::success),
        container(text(&config.whatsapp_number).size(11).color(STONE_800))
            .padding([4, 12])
            .style(pill_style(Color::from_rgba(1.0, 1.0, 1.0, 0.9))),
    ]
    .spacing(8)
    .align_x(Horizontal::Right);

    if indicator.is_visible() {
        widget = widget.push(
            container(text("Número copiado al portapapeles").size(12).color(EMERALD_900))
                .padding([4, 12])
                .style(pill_style(EMERALD_100)),
        );
    }

    container(widget)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(24)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright("Apartamento Dúplex en Filandia", 2026),
            "© 2026 Apartamento Dúplex en Filandia. Todos los derechos reservados."
        );
    }

    #[test]
    fn test_groups_in_authored_order() {
        let catalog = PhotoCatalog::build(&content::gallery());
        let names: Vec<&str> = groups(&catalog).into_iter().map(|(_, name)| name).collect();

        assert_eq!(names, vec!["Exteriores", "Interiores", "Destacadas"]);
    }

    #[test]
    fn test_first_group_starts_below_features() {
        let catalog = PhotoCatalog::build(&content::gallery());

        // Header 56, hero 520, features with two rows of three cards,
        // then the gallery padding, title and jump buttons
        let offset = group_offset(&catalog, 0, 1100.0).unwrap();
        assert!((offset - 1270.4).abs() < 0.01, "{offset}");
    }

    #[test]
    fn test_group_offsets_increase() {
        let catalog = PhotoCatalog::build(&content::gallery());

        for width in [400.0, 800.0, 1400.0] {
            let offsets: Vec<f32> = (0..3)
                .map(|group| group_offset(&catalog, group, width).unwrap())
                .collect();
            assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]), "{offsets:?}");
        }
        assert_eq!(group_offset(&catalog, 3, 800.0), None);
    }

    #[test]
    fn test_wrap_height() {
        assert_eq!(wrap_height(0, TILE, TILE_SPACING, 1000.0), 0.0);
        // Three tiles per row
        assert_eq!(wrap_height(3, (100.0, 50.0), 10.0, 320.0), 50.0);
        assert_eq!(wrap_height(4, (100.0, 50.0), 10.0, 320.0), 110.0);
        // Narrower than one item still lays out one per row
        assert_eq!(wrap_height(2, (100.0, 50.0), 10.0, 40.0), 110.0);
    }
}
