use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use evento_storefront::apis::upload::{is_valid_file_size, is_valid_image_mime, mime_for_path};
use evento_storefront::apis::ApiClient;
use evento_storefront::browse::CatalogBrowser;
use evento_storefront::config::Config;
use evento_storefront::constants::MAX_UPLOAD_MB;
use evento_storefront::domain::{CatalogItem, ItemKind};
use evento_storefront::filters::FilterField;
use evento_storefront::images::ImageResolver;
use evento_storefront::logging;
use evento_storefront::session::Session;

#[derive(Parser)]
#[command(name = "evento_storefront")]
#[command(about = "Event-services storefront client")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a catalog with optional filters
    Browse {
        /// Catalog to browse: salon or gastronomico
        #[arg(long, default_value = "salon")]
        kind: String,
        /// Event date (YYYY-MM-DD) to scope availability
        #[arg(long)]
        fecha: Option<String>,
        /// Zone name
        #[arg(long)]
        zona: Option<String>,
        /// Food type (caterer catalog only)
        #[arg(long)]
        categoria: Option<String>,
        #[arg(long)]
        precio_min: Option<String>,
        #[arg(long)]
        precio_max: Option<String>,
        #[arg(long)]
        capacidad_min: Option<String>,
        #[arg(long)]
        capacidad_max: Option<String>,
    },
    /// List the zones offered by the backend
    Zones,
    /// Inspect or end the authenticated session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Upload an entity image
    Upload {
        /// Entity segment: usuario, dj, barra, salon, gastronomico
        #[arg(long)]
        entity: String,
        #[arg(long)]
        id: i64,
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Verify the session cookie and show the logged-in user
    Check,
    /// End the session server-side and locally
    Logout,
}

fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn print_item(item: &CatalogItem, resolver: &ImageResolver) {
    let zone = item.zone_name().unwrap_or("-");
    let extra = match item {
        CatalogItem::Venue(v) => format!("{} personas", v.capacity),
        CatalogItem::Caterer(c) => c.food_type.clone(),
    };
    let photo = resolver.catalog_photo(item.photo(), item.kind().into());
    println!(
        "   - [{}] {} | ${} | {} | {}",
        item.id(),
        item.name(),
        item.price(),
        extra,
        zone
    );
    println!("     foto: {}", photo);
}

async fn run_browse(
    api: &ApiClient,
    kind: ItemKind,
    fecha: Option<NaiveDate>,
    filters: Vec<(FilterField, Option<String>)>,
) {
    let resolver = ImageResolver::new(api.base_url());
    let mut browser = CatalogBrowser::new(kind);
    browser.set_event_date(fecha);
    for (field, value) in filters {
        if let Some(value) = value {
            browser.set_filter(field, value);
        }
    }
    browser.refresh(api).await;

    println!("📦 Browsing the {} catalog", kind);
    if let Some(date) = browser.event_date() {
        println!("   Fecha seleccionada: {}", date.format("%d/%m/%Y"));
    }
    println!("🔎 {} resultado(s) encontrado(s)", browser.result_count());
    for item in browser.filtered() {
        print_item(item, &resolver);
    }
    if !browser.zone_options().is_empty() {
        println!("📍 Zonas: {}", browser.zone_options().join(", "));
    }
    if kind == ItemKind::Caterer && !browser.food_type_options().is_empty() {
        println!("🍽️  Tipos de comida: {}", browser.food_type_options().join(", "));
    }
}

async fn run_upload(api: &ApiClient, entity: &str, id: i64, file: &PathBuf) {
    let mime = match mime_for_path(file) {
        Some(mime) if is_valid_image_mime(mime) => mime,
        _ => {
            println!("⚠️  Not an accepted image type: {}", file.display());
            return;
        }
    };
    match tokio::fs::metadata(file).await {
        Ok(meta) if !is_valid_file_size(meta.len(), MAX_UPLOAD_MB) => {
            println!("⚠️  File exceeds the {} MB cap", MAX_UPLOAD_MB);
            return;
        }
        Err(e) => {
            println!("⚠️  Cannot read {}: {}", file.display(), e);
            return;
        }
        Ok(_) => {}
    }

    info!(entity, id, mime, "uploading image");
    let outcome = api.upload_image(entity, id, file).await;
    if outcome.success {
        println!("✅ {}", outcome.message);
        match outcome.image_url {
            Some(url) => println!("   URL: {}", url),
            None => println!("   (server response carried no file name)"),
        }
    } else {
        println!("❌ Upload failed: {}", outcome.message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;
    let api = ApiClient::new(&config)?;

    match cli.command {
        Commands::Browse {
            kind,
            fecha,
            zona,
            categoria,
            precio_min,
            precio_max,
            capacidad_min,
            capacidad_max,
        } => {
            let Some(kind) = ItemKind::parse(&kind) else {
                println!("⚠️  Unknown catalog: {} (expected salon or gastronomico)", kind);
                return Ok(());
            };
            let fecha = match fecha {
                Some(raw) => match parse_event_date(&raw) {
                    Some(date) => Some(date),
                    None => {
                        println!("⚠️  Invalid date: {} (expected YYYY-MM-DD)", raw);
                        return Ok(());
                    }
                },
                None => None,
            };
            let filters = vec![
                (FilterField::Zone, zona),
                (FilterField::Category, categoria),
                (FilterField::PriceMin, precio_min),
                (FilterField::PriceMax, precio_max),
                (FilterField::CapacityMin, capacidad_min),
                (FilterField::CapacityMax, capacidad_max),
            ];
            run_browse(&api, kind, fecha, filters).await;
        }
        Commands::Zones => match api.fetch_zones().await {
            Ok(zones) => {
                println!("📍 {} zona(s)", zones.len());
                for zone in &zones {
                    println!("   - [{}] {}", zone.id, zone.name);
                }
            }
            Err(e) => {
                error!("Failed to load zones: {}", e);
                println!("⚠️  Could not load zones");
            }
        },
        Commands::Session { action } => {
            let resolver = ImageResolver::new(api.base_url());
            let mut session = Session::new();
            match action {
                SessionAction::Check => match session.check(&api, &resolver).await {
                    Ok(true) => {
                        println!("✅ Session active");
                        if let Some(user) = session.user() {
                            println!("   {} {} <{}>", user.first_name, user.last_name, user.email);
                            println!("   rol: {}", user.role);
                            if !user.avatar.is_empty() {
                                println!("   avatar: {}", user.avatar);
                            }
                        }
                    }
                    Ok(false) => println!("🔒 No active session"),
                    Err(e) => {
                        error!("Session verify failed: {}", e);
                        println!("⚠️  Could not verify session");
                    }
                },
                SessionAction::Logout => {
                    session.logout(&api).await;
                    println!("👋 Session closed");
                }
            }
        }
        Commands::Upload { entity, id, file } => {
            run_upload(&api, &entity, id, &file).await;
        }
    }

    Ok(())
}
