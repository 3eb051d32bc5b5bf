use crate::constants::PLACEHOLDER_IMAGE;
use crate::domain::{CartItem, ItemKind};
use tracing::debug;

/// Screen rectangle of the image that triggered an add, so the host UI can
/// run its fly-to-cart animation from the right spot.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyToCart {
    pub src: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FlyToCart {
    /// Origin used when the caller could not measure the source image
    pub fn fallback(src: String) -> Self {
        Self {
            src,
            x: 0.0,
            y: 0.0,
            width: 40.0,
            height: 40.0,
        }
    }
}

type CartObserver = Box<dyn Fn(&FlyToCart) + Send + Sync>;

/// The set of selected offerings. At most one entry per (id, kind);
/// observers get a FlyToCart payload on every successful add.
#[derive(Default)]
pub struct Cart {
    items: Vec<CartItem>,
    observers: Vec<CartObserver>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fly-to-cart observer. Fire-and-forget: observers cannot
    /// veto or acknowledge the add.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&FlyToCart) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Inserts the item unless an entry with the same (id, kind) already
    /// exists. Returns whether the cart changed.
    pub fn add_item(&mut self, item: CartItem) -> bool {
        self.add_item_from(item, None)
    }

    /// Same as `add_item`, with the measured origin of the triggering image.
    pub fn add_item_from(&mut self, item: CartItem, origin: Option<FlyToCart>) -> bool {
        if self.is_in_cart(item.id, item.kind) {
            debug!(id = item.id, kind = %item.kind, "item already in cart, add skipped");
            return false;
        }

        let payload = origin.unwrap_or_else(|| {
            let src = item
                .image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
            FlyToCart::fallback(src)
        });

        debug!(id = item.id, kind = %item.kind, name = %item.name, "item added to cart");
        self.items.push(item);
        for observer in &self.observers {
            observer(&payload);
        }
        true
    }

    /// Removes the matching entry if present; absent pairs are a no-op.
    pub fn remove_item(&mut self, id: i64, kind: ItemKind) {
        self.items.retain(|item| !(item.id == id && item.kind == kind));
    }

    pub fn is_in_cart(&self, id: i64, kind: ItemKind) -> bool {
        self.items
            .iter()
            .any(|item| item.id == id && item.kind == kind)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line prices
    pub fn total(&self) -> i64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CartDetails;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn item(id: i64, kind: ItemKind, price: i64) -> CartItem {
        CartItem {
            id,
            kind,
            name: format!("item-{}", id),
            price,
            image: None,
            details: CartDetails::Venue {
                capacity: 100,
                zone: Some("Centro".to_string()),
            },
        }
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut cart = Cart::new();
        assert!(cart.add_item(item(1, ItemKind::Venue, 1000)));
        assert!(!cart.add_item(item(1, ItemKind::Venue, 1000)));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_same_id_different_kind_coexist() {
        let mut cart = Cart::new();
        assert!(cart.add_item(item(1, ItemKind::Venue, 1000)));
        assert!(cart.add_item(item(1, ItemKind::Caterer, 500)));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 1500);
    }

    #[test]
    fn test_remove_absent_pair_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item(1, ItemKind::Venue, 1000));
        cart.remove_item(2, ItemKind::Venue);
        cart.remove_item(1, ItemKind::Caterer);
        assert_eq!(cart.len(), 1);
        cart.remove_item(1, ItemKind::Venue);
        assert!(cart.is_empty());
        assert!(!cart.is_in_cart(1, ItemKind::Venue));
    }

    #[test]
    fn test_observers_fire_only_on_successful_add() {
        let mut cart = Cart::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        cart.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        cart.add_item(item(1, ItemKind::Venue, 1000));
        cart.add_item(item(1, ItemKind::Venue, 1000));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_origin_uses_fallback_rect_and_placeholder() {
        let mut cart = Cart::new();
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        cart.subscribe(move |payload| {
            sink.lock().unwrap().push(payload.clone());
        });

        cart.add_item(item(1, ItemKind::Venue, 1000));
        let payloads = seen.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].src, PLACEHOLDER_IMAGE);
        assert_eq!((payloads[0].width, payloads[0].height), (40.0, 40.0));
    }

    #[test]
    fn test_explicit_origin_is_forwarded() {
        let mut cart = Cart::new();
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        cart.subscribe(move |payload| {
            sink.lock().unwrap().push(payload.clone());
        });

        let origin = FlyToCart {
            src: "http://localhost:10000/uploads/salones/a.png".to_string(),
            x: 12.0,
            y: 34.0,
            width: 120.0,
            height: 90.0,
        };
        cart.add_item_from(item(1, ItemKind::Venue, 1000), Some(origin.clone()));
        assert_eq!(seen.lock().unwrap()[0], origin);
    }
}
