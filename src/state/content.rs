/// Authored page content
///
/// Everything the page shows besides the site config: the photo gallery,
/// the selling points, nearby places and guest reviews.
use super::data::{PhotoGroup, PhotoRef, PhotoSection};

/// Photo shown behind the hero text; not part of the gallery
pub const HERO_PHOTO: &str = "/hero01.jpg";

/// Short selling point shown as a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub symbol: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// Small labelled tile in the services block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amenity {
    pub symbol: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Review {
    pub name: &'static str,
    pub city: Option<&'static str>,
    pub text: &'static str,
    /// 1..=5
    pub stars: u8,
}

impl Review {
    /// "— Laura, Bogotá"
    pub fn signature(&self) -> String {
        match self.city {
            Some(city) => format!("— {}, {}", self.name, city),
            None => format!("— {}", self.name),
        }
    }

    /// Row of filled stars, clamped to 1..=5
    pub fn star_row(&self) -> String {
        "★".repeat(self.stars.clamp(1, 5) as usize)
    }
}

fn section(title: &str, description: &str, photos: &[(&str, &str)]) -> PhotoSection {
    PhotoSection {
        title: title.to_string(),
        description: description.to_string(),
        photos: photos
            .iter()
            .map(|(source, caption)| PhotoRef::new(*source, *caption))
            .collect(),
    }
}

/// The gallery, grouped for display.
///
/// "Destacadas" repeats photos from the other groups on purpose; the
/// catalog collapses them so the lightbox shows each photo once.
pub fn gallery() -> Vec<PhotoGroup> {
    vec![
        PhotoGroup {
            name: "Exteriores".to_string(),
            sections: vec![
                section(
                    "Fachada",
                    "Entrada independiente y parqueadero privado.",
                    &[("/g1.jpg", "Fachada y parqueadero")],
                ),
                section(
                    "Balcón",
                    "Montañas y atardeceres del Quindío.",
                    &[("/g4.jpg", "Balcón con vista")],
                ),
            ],
        },
        PhotoGroup {
            name: "Interiores".to_string(),
            sections: vec![
                section(
                    "Zona social",
                    "Sala y cocina completamente equipada.",
                    &[("/g2.jpg", "Sala y cocina")],
                ),
                section(
                    "Descanso",
                    "Dos niveles con habitaciones y baños modernos.",
                    &[("/g3.jpg", "Habitación principal"), ("/g5.jpg", "Baño moderno")],
                ),
                section(
                    "Detalles",
                    "Decoración pensada para sentirse en casa.",
                    &[("/g6.jpg", "Detalle de decoración"), ("/g7.jpg", "Detalle de decoración")],
                ),
            ],
        },
        PhotoGroup {
            name: "Destacadas".to_string(),
            sections: vec![section(
                "Lo mejor del dúplex",
                "Las fotos favoritas de nuestros huéspedes.",
                &[("/g4.jpg", "Balcón con vista"), ("/g2.jpg", "Sala y cocina")],
            )],
        },
    ]
}

pub static FEATURES: [Feature; 6] = [
    Feature { symbol: "⛰", title: "Vista panorámica", desc: "Balcón con montañas y atardeceres únicos." },
    Feature { symbol: "🚗", title: "Parqueadero privado", desc: "Tu vehículo seguro y a la mano." },
    Feature { symbol: "☕", title: "Cerca de cafés", desc: "Camina a cafés y restaurantes locales." },
    Feature { symbol: "📶", title: "WiFi rápido", desc: "Ideal para teletrabajo y streaming." },
    Feature { symbol: "🛡", title: "Tranquilo y seguro", desc: "Zona residencial, descanso garantizado." },
    Feature { symbol: "🚪", title: "Dúplex acogedor", desc: "Dos niveles con distribución cómoda." },
];

pub static AMENITIES: [Amenity; 6] = [
    Amenity { symbol: "⛰", label: "Vista montaña" },
    Amenity { symbol: "🚗", label: "Parqueadero" },
    Amenity { symbol: "☕", label: "Café cercano" },
    Amenity { symbol: "📶", label: "WiFi veloz" },
    Amenity { symbol: "🛡", label: "Seguro" },
    Amenity { symbol: "🚪", label: "2 niveles" },
];

pub const ABOUT: &str = "Dúplex moderno y acogedor a 5 minutos del parque principal. \
Disfruta de un balcón con vista a las montañas, cocina completamente equipada y parqueadero privado. \
Perfecto para parejas, familias o viajeros que buscan tranquilidad sin alejarse de lo mejor de Filandia.";

pub const LOCATION_INTRO: &str = "Base perfecta para recorrer el Eje Cafetero: Salento, \
Valle de Cocora y pueblos con encanto están a un corto trayecto.";

pub static NEARBY: [&str; 3] = [
    "Mirador de Filandia",
    "Parque principal y cafés",
    "Transporte a Salento y Cocora",
];

pub static REVIEWS: [Review; 3] = [
    Review {
        name: "Laura",
        city: Some("Bogotá"),
        text: "El lugar es increíble, todo limpio y con una vista espectacular. Volvería sin pensarlo.",
        stars: 5,
    },
    Review {
        name: "Carlos",
        city: Some("Medellín"),
        text: "Perfecto para descansar y trabajar remoto. Tiene todo lo necesario.",
        stars: 5,
    },
    Review {
        name: "Sophie",
        city: Some("Francia"),
        text: "Decoración hermosa y atención excelente. Muy recomendado.",
        stars: 5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_signature() {
        assert_eq!(REVIEWS[0].signature(), "— Laura, Bogotá");

        let anonymous = Review { city: None, ..REVIEWS[1] };
        assert_eq!(anonymous.signature(), "— Carlos");
    }

    #[test]
    fn test_star_row_is_clamped() {
        assert_eq!(REVIEWS[2].star_row().chars().count(), 5);
        assert_eq!(Review { stars: 0, ..REVIEWS[2] }.star_row().chars().count(), 1);
        assert_eq!(Review { stars: 9, ..REVIEWS[2] }.star_row().chars().count(), 5);
    }

    #[test]
    fn test_gallery_repeats_collapse() {
        let catalog = crate::state::catalog::PhotoCatalog::build(&gallery());
        assert_eq!(catalog.len(), 7);
    }
}
