use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::Order;

/// Everything an [`OrderScreen`](super::OrderScreen) needs at mount time.
///
/// Missing keys fall back to their defaults when deserialized, so a config
/// only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Capacity of the store session's request channel. `0` is treated as `1`.
    pub buffer_size: usize,

    /// The notification sent after each successful save.
    pub toast: ToastConfig,

    /// Rows present when the screen mounts, in display order. Ids must be unique.
    pub seed_orders: Vec<Order>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            toast: ToastConfig::default(),
            seed_orders: (1..=3).map(|id| Order::new(id, "Fan", 100.0, 1)).collect(),
        }
    }
}

impl ScreenConfig {
    /// Replaces the initial rows.
    pub fn with_seed_orders(mut self, orders: Vec<Order>) -> Self {
        self.seed_orders = orders;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            title: "Success!".to_string(),
            description: "Order saved successfully!".to_string(),
            duration_ms: 3000,
        }
    }
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_has_three_unique_rows() {
        let config = ScreenConfig::default();
        let ids: Vec<u64> = config.seed_orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(config.seed_orders.iter().all(|o| o.product == "Fan"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "toast": { "duration_ms": 5000 }, "seed_orders": [] }"#;
        let config: ScreenConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.toast.title, "Success!");
        assert_eq!(config.toast.duration(), Duration::from_secs(5));
        assert!(config.seed_orders.is_empty());
    }
}
