use serde::{Deserialize, Serialize};
use std::fmt;

/// Role string the backend assigns to administrator accounts
pub const ADMIN_ROLE: &str = "administrador";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub id: i64,
    pub username: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "img", default)]
    pub avatar: String,
}

impl User {
    /// Administrators browse the catalog but never build carts
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "capacidad")]
    pub capacity: u32,
    #[serde(rename = "montoS")]
    pub price: i64,
    #[serde(rename = "zona", default)]
    pub zone: Option<Zone>,
    #[serde(rename = "foto", default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caterer {
    pub id: i64,
    #[serde(rename = "nombreG")]
    pub name: String,
    #[serde(rename = "tipoComida")]
    pub food_type: String,
    #[serde(rename = "montoG")]
    pub price: i64,
    #[serde(rename = "zona", default)]
    pub zone: Option<Zone>,
    #[serde(rename = "foto", default)]
    pub photo: Option<String>,
}

/// The two catalog kinds the storefront sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Venue,
    Caterer,
}

impl ItemKind {
    /// API path segment and cart discriminator for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Venue => crate::constants::VENUE_API,
            ItemKind::Caterer => crate::constants::CATERER_API,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            crate::constants::VENUE_API => Some(ItemKind::Venue),
            crate::constants::CATERER_API => Some(ItemKind::Caterer),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable offering, uniform over the kind-specific shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogItem {
    Venue(Venue),
    Caterer(Caterer),
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItem::Venue(_) => ItemKind::Venue,
            CatalogItem::Caterer(_) => ItemKind::Caterer,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            CatalogItem::Venue(v) => v.id,
            CatalogItem::Caterer(c) => c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Venue(v) => &v.name,
            CatalogItem::Caterer(c) => &c.name,
        }
    }

    pub fn price(&self) -> i64 {
        match self {
            CatalogItem::Venue(v) => v.price,
            CatalogItem::Caterer(c) => c.price,
        }
    }

    pub fn zone_name(&self) -> Option<&str> {
        let zone = match self {
            CatalogItem::Venue(v) => v.zone.as_ref(),
            CatalogItem::Caterer(c) => c.zone.as_ref(),
        };
        zone.map(|z| z.name.as_str())
    }

    pub fn photo(&self) -> Option<&str> {
        match self {
            CatalogItem::Venue(v) => v.photo.as_deref(),
            CatalogItem::Caterer(c) => c.photo.as_deref(),
        }
    }

    /// Venues only
    pub fn capacity(&self) -> Option<u32> {
        match self {
            CatalogItem::Venue(v) => Some(v.capacity),
            CatalogItem::Caterer(_) => None,
        }
    }

    /// Caterers only
    pub fn category(&self) -> Option<&str> {
        match self {
            CatalogItem::Venue(_) => None,
            CatalogItem::Caterer(c) => Some(&c.food_type),
        }
    }
}

/// Kind-specific details shown on the cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartDetails {
    Venue { capacity: u32, zone: Option<String> },
    Caterer { food_type: String, zone: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub kind: ItemKind,
    pub name: String,
    pub price: i64,
    pub image: Option<String>,
    pub details: CartDetails,
}

impl CartItem {
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            id: venue.id,
            kind: ItemKind::Venue,
            name: venue.name.clone(),
            price: venue.price,
            image: venue.photo.clone(),
            details: CartDetails::Venue {
                capacity: venue.capacity,
                zone: venue.zone.as_ref().map(|z| z.name.clone()),
            },
        }
    }

    pub fn from_caterer(caterer: &Caterer) -> Self {
        Self {
            id: caterer.id,
            kind: ItemKind::Caterer,
            name: caterer.name.clone(),
            price: caterer.price,
            image: caterer.photo.clone(),
            details: CartDetails::Caterer {
                food_type: caterer.food_type.clone(),
                zone: caterer.zone.as_ref().map(|z| z.name.clone()),
            },
        }
    }

    pub fn from_catalog(item: &CatalogItem) -> Self {
        match item {
            CatalogItem::Venue(v) => Self::from_venue(v),
            CatalogItem::Caterer(c) => Self::from_caterer(c),
        }
    }
}
