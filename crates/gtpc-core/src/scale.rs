//! Cardinalities of the generated graph.
//!
//! The defaults are the benchmark constants. A YAML file may override any of
//! them, which is mostly useful for producing small datasets in tests:
//!
//! ```yaml
//! items: 1000
//! customers_per_district: 30
//! new_order_threshold: 21
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for scale configuration.
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    /// Error reading the scale file
    #[error("Failed to read scale file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A cardinality that must be positive is zero
    #[error("Scale field '{0}' must be greater than zero")]
    ZeroCardinality(&'static str),

    /// The warehouse count is zero
    #[error("Warehouse count must be at least 1")]
    NoWarehouses,

    /// A global id range does not fit into 32 bits
    #[error("{entity} id range for {warehouses} warehouses exceeds u32::MAX")]
    RangeOverflow {
        entity: &'static str,
        warehouses: u32,
    },
}

/// Per-entity cardinalities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scale {
    /// Number of items, and stock rows per warehouse.
    pub items: u32,
    pub districts_per_warehouse: u32,
    /// Customers per district. Orders per district is the same number since
    /// every customer places exactly one order.
    pub customers_per_district: u32,
    pub suppliers: u32,
    /// Orders whose per-district sequence number exceeds this value are
    /// generated as undelivered new orders. Fixed, not derived from
    /// `customers_per_district`.
    pub new_order_threshold: u32,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            items: 100_000,
            districts_per_warehouse: 10,
            customers_per_district: 3000,
            suppliers: 10_000,
            new_order_threshold: 2100,
        }
    }
}

impl Scale {
    /// Parse a scale from a YAML string. Missing fields keep their defaults,
    /// unknown fields are rejected.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScaleError> {
        let scale: Scale = serde_yaml::from_str(yaml)?;
        Ok(scale)
    }

    /// Load a scale from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScaleError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check that every cardinality is positive and that the global id
    /// ranges for `warehouses` fit into `u32`.
    pub fn validate(&self, warehouses: u32) -> Result<(), ScaleError> {
        if warehouses == 0 {
            return Err(ScaleError::NoWarehouses);
        }
        let fields = [
            ("items", self.items),
            ("districts_per_warehouse", self.districts_per_warehouse),
            ("customers_per_district", self.customers_per_district),
            ("suppliers", self.suppliers),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(ScaleError::ZeroCardinality(name));
            }
        }
        self.customer_count(warehouses)?;
        self.stock_count(warehouses)?;
        Ok(())
    }

    /// Total number of customers (and orders). This is the range of the
    /// customer-order permutation and must fit `u32`.
    pub fn customer_count(&self, warehouses: u32) -> Result<u32, ScaleError> {
        warehouses
            .checked_mul(self.districts_per_warehouse)
            .and_then(|d| d.checked_mul(self.customers_per_district))
            .filter(|&n| n < u32::MAX)
            .ok_or(ScaleError::RangeOverflow {
                entity: "Customer",
                warehouses,
            })
    }

    /// Total number of stock rows.
    pub fn stock_count(&self, warehouses: u32) -> Result<u32, ScaleError> {
        warehouses
            .checked_mul(self.items)
            .ok_or(ScaleError::RangeOverflow {
                entity: "Stock",
                warehouses,
            })
    }

    /// Global id of district `district` (1-based) of warehouse `warehouse`.
    pub fn district_id(&self, warehouse: u32, district: u32) -> u64 {
        u64::from(self.districts_per_warehouse) * u64::from(warehouse - 1) + u64::from(district)
    }

    /// Global id of the stock row holding `item` in `warehouse`.
    pub fn stock_id(&self, warehouse: u32, item: u32) -> u64 {
        u64::from(self.items) * u64::from(warehouse - 1) + u64::from(item)
    }

    /// Number of rows carrying the originality marker per marked population.
    pub fn original_count(&self) -> u32 {
        self.items / 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_benchmark_scale() {
        let scale = Scale::default();
        assert_eq!(scale.items, 100_000);
        assert_eq!(scale.districts_per_warehouse, 10);
        assert_eq!(scale.customers_per_district, 3000);
        assert_eq!(scale.suppliers, 10_000);
        assert_eq!(scale.new_order_threshold, 2100);
    }

    #[test]
    fn test_from_yaml_partial_override() {
        let scale = Scale::from_yaml("items: 1000\ncustomers_per_district: 30\n").unwrap();
        assert_eq!(scale.items, 1000);
        assert_eq!(scale.customers_per_district, 30);
        assert_eq!(scale.suppliers, 10_000);
        assert_eq!(scale.new_order_threshold, 2100);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_types() {
        let result = Scale::from_yaml("items: lots\n");
        assert!(matches!(result, Err(ScaleError::YamlError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "suppliers: 50").unwrap();

        let scale = Scale::from_file(file.path()).unwrap();
        assert_eq!(scale.suppliers, 50);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_field() {
        // Misspelled "items" and "customers_per_district".
        let result = Scale::from_yaml("item: 10\ncustomer_per_district: 5\n");
        assert!(matches!(result, Err(ScaleError::YamlError(_))));
    }

    #[test]
    fn test_validate_rejects_zero() {
        let scale = Scale {
            suppliers: 0,
            ..Scale::default()
        };
        assert!(matches!(
            scale.validate(1),
            Err(ScaleError::ZeroCardinality("suppliers"))
        ));
        assert!(matches!(
            Scale::default().validate(0),
            Err(ScaleError::NoWarehouses)
        ));
    }

    #[test]
    fn test_validate_rejects_overflowing_customer_range() {
        let scale = Scale::default();
        assert!(scale.validate(1000).is_ok());
        assert!(matches!(
            scale.validate(200_000),
            Err(ScaleError::RangeOverflow {
                entity: "Customer",
                ..
            })
        ));
    }

    #[test]
    fn test_global_ids_are_not_reset_per_warehouse() {
        let scale = Scale::default();
        assert_eq!(scale.district_id(1, 1), 1);
        assert_eq!(scale.district_id(1, 10), 10);
        assert_eq!(scale.district_id(2, 1), 11);
        assert_eq!(scale.stock_id(1, 1), 1);
        assert_eq!(scale.stock_id(3, 7), 200_007);
    }

    #[test]
    fn test_counts() {
        let scale = Scale::default();
        assert_eq!(scale.customer_count(2).unwrap(), 60_000);
        assert_eq!(scale.stock_count(2).unwrap(), 200_000);
        assert_eq!(scale.original_count(), 10_000);
    }
}
