use crate::apis::catalog::zone_name_options;
use crate::apis::CatalogSource;
use crate::domain::{CatalogItem, ItemKind};
use crate::filters::{apply_filters, FilterField, FilterState};
use chrono::NaiveDate;
use tracing::{error, info};

/// One browsing screen's worth of state: the fetched list, the zone
/// options, the filter inputs, and the derived filtered list. The filtered
/// list is recomputed from scratch after every item or filter change.
pub struct CatalogBrowser {
    kind: ItemKind,
    event_date: Option<NaiveDate>,
    items: Vec<CatalogItem>,
    zones: Vec<String>,
    filters: FilterState,
    filtered: Vec<CatalogItem>,
}

impl CatalogBrowser {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            event_date: None,
            items: Vec::new(),
            zones: Vec::new(),
            filters: FilterState::default(),
            filtered: Vec::new(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Scopes subsequent refreshes to an event date; None browses the
    /// whole catalog.
    pub fn set_event_date(&mut self, date: Option<NaiveDate>) {
        self.event_date = date;
    }

    pub fn event_date(&self) -> Option<NaiveDate> {
        self.event_date
    }

    /// Re-fetches items and zones. Either fetch failing is logged and
    /// leaves that part of the previous state in place; whatever arrived
    /// last wins wholesale.
    pub async fn refresh(&mut self, source: &dyn CatalogSource) {
        match source.catalog(self.kind, self.event_date).await {
            Ok(items) => {
                info!("Loaded {} {} items", items.len(), self.kind);
                self.items = items;
            }
            Err(e) => error!("Failed to load {} catalog: {}", self.kind, e),
        }
        match source.zones().await {
            Ok(zones) => self.zones = zone_name_options(&zones),
            Err(e) => error!("Failed to load zones: {}", e),
        }
        self.recompute();
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.filters.set(field, value.into());
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.recompute();
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn filtered(&self) -> &[CatalogItem] {
        &self.filtered
    }

    pub fn result_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn zone_options(&self) -> &[String] {
        &self.zones
    }

    /// Distinct food types present in the fetched list, first-seen order.
    /// Only meaningful for caterer browsing; empty for venues.
    pub fn food_type_options(&self) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();
        for item in &self.items {
            let Some(food_type) = item.category() else {
                continue;
            };
            let food_type = food_type.trim();
            if food_type.is_empty() || options.iter().any(|seen| seen == food_type) {
                continue;
            }
            options.push(food_type.to_string());
        }
        options
    }

    fn recompute(&mut self) {
        self.filtered = apply_filters(&self.items, &self.filters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Caterer, Venue, Zone};
    use crate::error::{Result, StorefrontError};
    use async_trait::async_trait;

    struct FakeSource {
        items: Vec<CatalogItem>,
        zones: Vec<Zone>,
        fail: bool,
    }

    #[async_trait]
    impl CatalogSource for FakeSource {
        async fn catalog(
            &self,
            _kind: ItemKind,
            _date: Option<NaiveDate>,
        ) -> Result<Vec<CatalogItem>> {
            if self.fail {
                return Err(StorefrontError::Api {
                    message: "catalog unavailable".to_string(),
                });
            }
            Ok(self.items.clone())
        }

        async fn zones(&self) -> Result<Vec<Zone>> {
            if self.fail {
                return Err(StorefrontError::Api {
                    message: "zones unavailable".to_string(),
                });
            }
            Ok(self.zones.clone())
        }
    }

    fn venue(id: i64, price: i64, zone: &str) -> CatalogItem {
        CatalogItem::Venue(Venue {
            id,
            name: format!("salon-{}", id),
            capacity: 100,
            price,
            zone: Some(Zone {
                id,
                name: zone.to_string(),
            }),
            photo: None,
        })
    }

    fn source(items: Vec<CatalogItem>) -> FakeSource {
        FakeSource {
            items,
            zones: vec![
                Zone { id: 1, name: "Centro".to_string() },
                Zone { id: 2, name: "Norte".to_string() },
            ],
            fail: false,
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_items_and_zone_options() {
        let mut browser = CatalogBrowser::new(ItemKind::Venue);
        browser
            .refresh(&source(vec![venue(1, 1000, "Centro"), venue(2, 2000, "Norte")]))
            .await;
        assert_eq!(browser.items().len(), 2);
        assert_eq!(browser.filtered().len(), 2);
        assert_eq!(browser.zone_options(), ["Centro", "Norte"]);

        browser.refresh(&source(vec![venue(3, 500, "Sur")])).await;
        assert_eq!(browser.items().len(), 1);
        assert_eq!(browser.items()[0].id(), 3);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_list() {
        let mut browser = CatalogBrowser::new(ItemKind::Venue);
        browser.refresh(&source(vec![venue(1, 1000, "Centro")])).await;
        assert_eq!(browser.items().len(), 1);

        let broken = FakeSource {
            items: vec![],
            zones: vec![],
            fail: true,
        };
        browser.refresh(&broken).await;
        assert_eq!(browser.items().len(), 1);
        assert_eq!(browser.filtered().len(), 1);
        assert_eq!(browser.zone_options(), ["Centro", "Norte"]);
    }

    #[tokio::test]
    async fn test_filters_recompute_on_change_and_clear() {
        let mut browser = CatalogBrowser::new(ItemKind::Venue);
        browser
            .refresh(&source(vec![venue(1, 1000, "Centro"), venue(2, 2000, "Norte")]))
            .await;

        browser.set_filter(FilterField::Zone, "Norte");
        assert_eq!(browser.result_count(), 1);
        assert_eq!(browser.filtered()[0].id(), 2);

        browser.set_filter(FilterField::PriceMax, "1500");
        assert_eq!(browser.result_count(), 0);

        browser.clear_filters();
        assert_eq!(browser.result_count(), 2);
    }

    #[tokio::test]
    async fn test_food_type_options_come_from_fetched_caterers() {
        let caterer = |id: i64, food_type: &str| {
            CatalogItem::Caterer(Caterer {
                id,
                name: format!("c{}", id),
                food_type: food_type.to_string(),
                price: 1000,
                zone: None,
                photo: None,
            })
        };
        let mut browser = CatalogBrowser::new(ItemKind::Caterer);
        browser
            .refresh(&source(vec![
                caterer(1, "italiana"),
                caterer(2, "japonesa"),
                caterer(3, "italiana"),
            ]))
            .await;
        assert_eq!(browser.food_type_options(), ["italiana", "japonesa"]);
    }
}
