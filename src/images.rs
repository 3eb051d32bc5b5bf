use crate::constants::{
    BAR_ENTITY, BAR_UPLOAD_DIR, CATERER_ENTITY, CATERER_UPLOAD_DIR, DJ_ENTITY, DJ_UPLOAD_DIR,
    PLACEHOLDER_IMAGE, USER_ENTITY, USER_UPLOAD_DIR, VENUE_ENTITY, VENUE_UPLOAD_DIR,
};

/// Entities the backend stores images for, keyed by their API path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Dj,
    Bar,
    Venue,
    Caterer,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => USER_ENTITY,
            EntityKind::Dj => DJ_ENTITY,
            EntityKind::Bar => BAR_ENTITY,
            EntityKind::Venue => VENUE_ENTITY,
            EntityKind::Caterer => CATERER_ENTITY,
        }
    }

    /// Directory under <base>/uploads/ holding this entity's images
    pub fn upload_dir(&self) -> &'static str {
        match self {
            EntityKind::User => USER_UPLOAD_DIR,
            EntityKind::Dj => DJ_UPLOAD_DIR,
            EntityKind::Bar => BAR_UPLOAD_DIR,
            EntityKind::Venue => VENUE_UPLOAD_DIR,
            EntityKind::Caterer => CATERER_UPLOAD_DIR,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            USER_ENTITY => Some(EntityKind::User),
            DJ_ENTITY => Some(EntityKind::Dj),
            BAR_ENTITY => Some(EntityKind::Bar),
            VENUE_ENTITY => Some(EntityKind::Venue),
            CATERER_ENTITY => Some(EntityKind::Caterer),
            _ => None,
        }
    }
}

impl From<crate::domain::ItemKind> for EntityKind {
    fn from(kind: crate::domain::ItemKind) -> Self {
        match kind {
            crate::domain::ItemKind::Venue => EntityKind::Venue,
            crate::domain::ItemKind::Caterer => EntityKind::Caterer,
        }
    }
}

/// Normalizes raw image values coming off the wire into asset URLs.
///
/// The backend is inconsistent about what it stores: sometimes a bare
/// filename, sometimes a `/uploads/...` path, sometimes a full URL. The
/// two call sites also disagree about empty input, so the avatar and
/// catalog policies are kept separate.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl ImageResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// User avatar policy: empty input stays empty.
    pub fn user_avatar(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }
        self.resolve(raw, EntityKind::User)
    }

    /// Catalog photo policy: empty input falls back to the placeholder asset.
    pub fn catalog_photo(&self, raw: Option<&str>, kind: EntityKind) -> String {
        match raw {
            Some(value) if !value.trim().is_empty() => self.resolve(value, kind),
            _ => PLACEHOLDER_IMAGE.to_string(),
        }
    }

    fn resolve(&self, raw: &str, kind: EntityKind) -> String {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return raw.to_string();
        }
        if raw.starts_with("/uploads/") {
            return format!("{}{}", self.base_url, raw);
        }
        // Anything else is a filename under the entity's upload directory
        format!("{}/uploads/{}/{}", self.base_url, kind.upload_dir(), raw)
    }
}

/// Builds the public URL for a freshly uploaded file. An entity segment
/// the client does not know about degrades to the raw filename.
pub fn upload_image_url(base_url: &str, kind: Option<EntityKind>, file_name: &str) -> String {
    match kind {
        Some(kind) => format!(
            "{}/uploads/{}/{}",
            base_url.trim_end_matches('/'),
            kind.upload_dir(),
            file_name
        ),
        None => file_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ImageResolver {
        ImageResolver::new("http://localhost:10000")
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            resolver().user_avatar("https://x/y.png"),
            "https://x/y.png"
        );
        assert_eq!(
            resolver().catalog_photo(Some("http://cdn/y.png"), EntityKind::Venue),
            "http://cdn/y.png"
        );
    }

    #[test]
    fn test_empty_avatar_stays_empty() {
        assert_eq!(resolver().user_avatar(""), "");
        assert_eq!(resolver().user_avatar("   "), "");
    }

    #[test]
    fn test_empty_catalog_photo_gets_placeholder() {
        assert_eq!(
            resolver().catalog_photo(None, EntityKind::Venue),
            PLACEHOLDER_IMAGE
        );
        assert_eq!(
            resolver().catalog_photo(Some(""), EntityKind::Caterer),
            PLACEHOLDER_IMAGE
        );
    }

    #[test]
    fn test_bare_filename_lands_in_kind_directory() {
        assert_eq!(
            resolver().catalog_photo(Some("photo.png"), EntityKind::Venue),
            "http://localhost:10000/uploads/salones/photo.png"
        );
        assert_eq!(
            resolver().catalog_photo(Some("menu.jpg"), EntityKind::Caterer),
            "http://localhost:10000/uploads/gastronomicos/menu.jpg"
        );
        assert_eq!(
            resolver().user_avatar("me.png"),
            "http://localhost:10000/uploads/usuarios/me.png"
        );
    }

    #[test]
    fn test_upload_root_path_gets_domain() {
        assert_eq!(
            resolver().user_avatar("/uploads/usuarios/me.png"),
            "http://localhost:10000/uploads/usuarios/me.png"
        );
    }

    #[test]
    fn test_unknown_entity_falls_back_to_raw_filename() {
        assert_eq!(
            upload_image_url("http://localhost:10000", EntityKind::parse("banda"), "x.png"),
            "x.png"
        );
        assert_eq!(
            upload_image_url("http://localhost:10000", EntityKind::parse("salon"), "x.png"),
            "http://localhost:10000/uploads/salones/x.png"
        );
    }
}
