use crate::domain::CatalogItem;

/// User-editable filter inputs. Every field is free text straight from the
/// form; an empty string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub zone: String,
    pub category: String,
    pub price_min: String,
    pub price_max: String,
    pub capacity_min: String,
    pub capacity_max: String,
}

/// Addressable filter fields, so callers name fields by variant instead of
/// by string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Zone,
    Category,
    PriceMin,
    PriceMax,
    CapacityMin,
    CapacityMax,
}

impl FilterState {
    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Zone => self.zone = value,
            FilterField::Category => self.category = value,
            FilterField::PriceMin => self.price_min = value,
            FilterField::PriceMax => self.price_max = value,
            FilterField::CapacityMin => self.capacity_min = value,
            FilterField::CapacityMax => self.capacity_max = value,
        }
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Parses a free-text bound. Non-numeric input is no constraint.
fn parse_bound(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Exact match first, then the normalized comparison the backend's mixed
/// zone spellings require.
fn zone_matches(item_zone: Option<&str>, wanted: &str) -> bool {
    let Some(item_zone) = item_zone else {
        return false;
    };
    if item_zone == wanted {
        return true;
    }
    item_zone.trim().to_lowercase() == wanted.trim().to_lowercase()
}

fn in_bounds(value: i64, min: Option<i64>, max: Option<i64>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

/// Applies the conjunction of all set filters to the fetched list.
/// Pure and deterministic: the result is always a subset of `items`,
/// recomputed from scratch on every call.
pub fn apply_filters(items: &[CatalogItem], filters: &FilterState) -> Vec<CatalogItem> {
    let price_min = parse_bound(&filters.price_min);
    let price_max = parse_bound(&filters.price_max);
    let capacity_min = parse_bound(&filters.capacity_min);
    let capacity_max = parse_bound(&filters.capacity_max);

    items
        .iter()
        .filter(|item| {
            if !filters.zone.is_empty() && !zone_matches(item.zone_name(), &filters.zone) {
                return false;
            }
            if !filters.category.is_empty() && item.category() != Some(filters.category.as_str()) {
                return false;
            }
            if !in_bounds(item.price(), price_min, price_max) {
                return false;
            }
            if capacity_min.is_some() || capacity_max.is_some() {
                // A bound on capacity only admits items that declare one
                match item.capacity() {
                    Some(capacity) => {
                        if !in_bounds(i64::from(capacity), capacity_min, capacity_max) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        })
        .cloned()
        .collect()
}
