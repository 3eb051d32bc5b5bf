/// Wire name constants to ensure consistency across the codebase
/// These constants define the mapping between API path segments and upload directories

// Catalog endpoints (used in CLI and the fetchers)
pub const VENUE_API: &str = "salon";
pub const CATERER_API: &str = "gastronomico";
pub const ZONE_API: &str = "zona";

// Entity path segments accepted by the upload endpoint
pub const USER_ENTITY: &str = "usuario";
pub const DJ_ENTITY: &str = "dj";
pub const BAR_ENTITY: &str = "barra";
pub const VENUE_ENTITY: &str = "salon";
pub const CATERER_ENTITY: &str = "gastronomico";

// Upload directories served under <base>/uploads/
pub const USER_UPLOAD_DIR: &str = "usuarios";
pub const DJ_UPLOAD_DIR: &str = "djs";
pub const BAR_UPLOAD_DIR: &str = "barras";
pub const VENUE_UPLOAD_DIR: &str = "salones";
pub const CATERER_UPLOAD_DIR: &str = "gastronomicos";

/// Asset shown when a catalog item has no photo
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.svg";

/// Query parameter carrying the event date, formatted DD/MM/YYYY
pub const DATE_PARAM: &str = "fecha";
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// MIME types accepted for image uploads
pub const VALID_IMAGE_MIMES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Default upload size cap in megabytes
pub const MAX_UPLOAD_MB: u64 = 5;

/// Get all entity segments the upload endpoint knows about
pub fn supported_entities() -> Vec<&'static str> {
    vec![
        USER_ENTITY,
        DJ_ENTITY,
        BAR_ENTITY,
        VENUE_ENTITY,
        CATERER_ENTITY,
    ]
}
