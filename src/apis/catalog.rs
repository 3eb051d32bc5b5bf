use super::{ApiClient, CatalogSource, DataEnvelope};
use crate::constants::{DATE_FORMAT, DATE_PARAM, ZONE_API};
use crate::domain::{Caterer, CatalogItem, ItemKind, Venue, Zone};
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{info, instrument};

/// Formats an event date the way the API expects it: DD/MM/YYYY
pub fn date_param(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn fetch_venues(&self, date: Option<NaiveDate>) -> Result<Vec<Venue>> {
        let mut request = self.http().get(self.api_url(ItemKind::Venue.as_str()));
        if let Some(date) = date {
            request = request.query(&[(DATE_PARAM, date_param(date))]);
        }
        let envelope: DataEnvelope<Vec<Venue>> =
            request.send().await?.error_for_status()?.json().await?;
        info!("Fetched {} venues", envelope.data.len());
        Ok(envelope.data)
    }

    #[instrument(skip(self))]
    pub async fn fetch_caterers(&self, date: Option<NaiveDate>) -> Result<Vec<Caterer>> {
        let mut request = self.http().get(self.api_url(ItemKind::Caterer.as_str()));
        if let Some(date) = date {
            request = request.query(&[(DATE_PARAM, date_param(date))]);
        }
        let envelope: DataEnvelope<Vec<Caterer>> =
            request.send().await?.error_for_status()?.json().await?;
        info!("Fetched {} caterers", envelope.data.len());
        Ok(envelope.data)
    }

    pub async fn fetch_catalog(
        &self,
        kind: ItemKind,
        date: Option<NaiveDate>,
    ) -> Result<Vec<CatalogItem>> {
        let items = match kind {
            ItemKind::Venue => self
                .fetch_venues(date)
                .await?
                .into_iter()
                .map(CatalogItem::Venue)
                .collect(),
            ItemKind::Caterer => self
                .fetch_caterers(date)
                .await?
                .into_iter()
                .map(CatalogItem::Caterer)
                .collect(),
        };
        Ok(items)
    }

    #[instrument(skip(self))]
    pub async fn fetch_zones(&self) -> Result<Vec<Zone>> {
        let envelope: DataEnvelope<Vec<Zone>> = self
            .http()
            .get(self.api_url(ZONE_API))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        info!("Fetched {} zones", envelope.data.len());
        Ok(envelope.data)
    }
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn catalog(&self, kind: ItemKind, date: Option<NaiveDate>) -> Result<Vec<CatalogItem>> {
        self.fetch_catalog(kind, date).await
    }

    async fn zones(&self) -> Result<Vec<Zone>> {
        self.fetch_zones().await
    }
}

/// Distinct, trimmed zone names in first-seen order. The backend has
/// blank and duplicated rows; the filter dropdown should not.
pub fn zone_name_options(zones: &[Zone]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for zone in zones {
        let name = zone.name.trim();
        if name.is_empty() || options.iter().any(|seen| seen == name) {
            continue;
        }
        options.push(name.to_string());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_param_is_dmy() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(date_param(date), "07/03/2026");
    }

    #[test]
    fn test_zone_options_trim_dedupe_and_keep_order() {
        let zones = vec![
            Zone { id: 1, name: " Centro ".to_string() },
            Zone { id: 2, name: "Norte".to_string() },
            Zone { id: 3, name: "Centro".to_string() },
            Zone { id: 4, name: "   ".to_string() },
            Zone { id: 5, name: "Sur".to_string() },
        ];
        assert_eq!(zone_name_options(&zones), vec!["Centro", "Norte", "Sur"]);
    }

    #[test]
    fn test_catalog_envelope_parses_wire_names() {
        let body = serde_json::json!({
            "data": [{
                "id": 7,
                "nombre": "Gran Salon",
                "capacidad": 250,
                "montoS": 180000,
                "zona": { "id": 1, "nombre": "Centro" },
                "foto": "gran-salon.png"
            }]
        });
        let envelope: DataEnvelope<Vec<Venue>> = serde_json::from_value(body).unwrap();
        let venue = &envelope.data[0];
        assert_eq!(venue.name, "Gran Salon");
        assert_eq!(venue.capacity, 250);
        assert_eq!(venue.price, 180000);
        assert_eq!(venue.zone.as_ref().unwrap().name, "Centro");
    }

    #[test]
    fn test_caterer_envelope_tolerates_missing_photo_and_zone() {
        let body = serde_json::json!({
            "data": [{
                "id": 3,
                "nombreG": "Pasta Total",
                "tipoComida": "italiana",
                "montoG": 50000
            }]
        });
        let envelope: DataEnvelope<Vec<Caterer>> = serde_json::from_value(body).unwrap();
        let caterer = &envelope.data[0];
        assert_eq!(caterer.name, "Pasta Total");
        assert!(caterer.zone.is_none());
        assert!(caterer.photo.is_none());
    }
}
