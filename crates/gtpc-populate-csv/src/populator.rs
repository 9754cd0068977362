//! Orchestrates the entity routines in dependency order.

use crate::entities;
use crate::error::PopulateError;
use crate::metrics::{EntityMetrics, RunMetrics};
use crate::session::{IdCounters, PopulateConfig, Session};
use gtpc_core::{validate_order, Entity, PlanError, GENERATION_ORDER};
use std::time::Instant;
use tracing::{debug, info};

/// Graph populator that writes the GTPC dataset into a directory.
pub struct GraphPopulator {
    session: Session,
    completed: Vec<Entity>,
}

impl GraphPopulator {
    /// Create a new populator.
    ///
    /// Fails before anything is written if the warehouse count or the scale
    /// is invalid, or if the output directory does not exist.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = PopulateConfig::new("/tmp/gtpc", 1).with_seed(42);
    /// let metrics = GraphPopulator::new(config)?.run()?;
    /// ```
    pub fn new(config: PopulateConfig) -> Result<Self, PopulateError> {
        config.validate()?;
        Ok(Self {
            session: Session::new(config),
            completed: Vec::new(),
        })
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &PopulateConfig {
        &self.session.config
    }

    /// Entities generated so far, in generation order.
    pub fn completed(&self) -> &[Entity] {
        &self.completed
    }

    /// Id counters, holding the last id assigned per entity.
    pub fn ids(&self) -> &IdCounters {
        &self.session.ids
    }

    /// Generate every entity not generated yet, in dependency order.
    pub fn run(&mut self) -> Result<RunMetrics, PopulateError> {
        validate_order(&GENERATION_ORDER)?;

        let start_time = Instant::now();
        let config = self.config();
        info!(
            "Generating GTPC dataset for {} warehouse(s) with seed {} into '{}'",
            config.warehouses,
            config.seed,
            config.output_dir.display()
        );

        let mut metrics = RunMetrics::default();
        for entity in GENERATION_ORDER {
            if self.completed.contains(&entity) {
                debug!("Skipping {entity}, already generated");
                continue;
            }
            metrics.entities.push(self.generate(entity)?);
        }
        metrics.total_duration = start_time.elapsed();

        info!(
            "GTPC dataset complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written(),
            metrics.bytes_written(),
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Generate a single entity together with its relationship streams.
    ///
    /// Every dependency of `entity` must have been generated first, and each
    /// entity can be generated only once per populator.
    pub fn generate(&mut self, entity: Entity) -> Result<EntityMetrics, PopulateError> {
        if self.completed.contains(&entity) {
            return Err(PopulateError::AlreadyGenerated(entity));
        }
        if let Some(&dependency) = entity
            .dependencies()
            .iter()
            .find(|d| !self.completed.contains(d))
        {
            return Err(PlanError::MissingDependency { entity, dependency }.into());
        }

        info!("Generating {} ..", entity.description());
        let start_time = Instant::now();
        let streams = entities::generate(entity, &mut self.session)?;
        let duration = start_time.elapsed();

        for stream in &streams {
            debug!(
                "Stream '{}': {} rows, {} bytes",
                stream.stream.name(),
                stream.rows_written,
                stream.file_size_bytes
            );
        }
        let metrics = EntityMetrics {
            entity,
            streams,
            duration,
        };
        info!(
            "Generated {entity}: {} rows in {:?}",
            metrics.rows_written(),
            metrics.duration
        );

        self.completed.push(entity);
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtpc_core::{Scale, Stream};
    use std::collections::HashSet;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn small_scale() -> Scale {
        Scale {
            items: 50,
            districts_per_warehouse: 2,
            customers_per_district: 30,
            suppliers: 20,
            new_order_threshold: 21,
        }
    }

    fn small_config(dir: &Path, warehouses: u32) -> PopulateConfig {
        PopulateConfig::new(dir, warehouses).with_scale(small_scale())
    }

    fn read_rows(dir: &Path, stream: Stream) -> Vec<Vec<String>> {
        let content = fs::read_to_string(dir.join(stream.file_name())).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), stream.header());
        lines
            .map(|line| line.split('|').map(str::to_string).collect())
            .collect()
    }

    fn column(rows: &[Vec<String>], index: usize) -> Vec<u64> {
        rows.iter().map(|r| r[index].parse().unwrap()).collect()
    }

    #[test]
    fn test_run_writes_every_stream() {
        let temp_dir = TempDir::new().unwrap();
        let mut populator = GraphPopulator::new(small_config(temp_dir.path(), 2)).unwrap();
        let metrics = populator.run().unwrap();

        assert_eq!(populator.completed(), &GENERATION_ORDER);
        for stream in Stream::ALL {
            let rows = read_rows(temp_dir.path(), stream);
            assert_eq!(metrics.rows(stream), Some(rows.len() as u64), "{stream:?}");
            let width = stream.columns().len();
            assert!(rows.iter().all(|r| r.len() == width), "{stream:?}");
        }

        // No temporary files remain.
        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, Stream::ALL.len());
    }

    #[test]
    fn test_cardinalities() {
        let temp_dir = TempDir::new().unwrap();
        let mut populator = GraphPopulator::new(small_config(temp_dir.path(), 3)).unwrap();
        let metrics = populator.run().unwrap();

        assert_eq!(metrics.rows(Stream::Warehouse), Some(3));
        assert_eq!(metrics.rows(Stream::District), Some(6));
        assert_eq!(metrics.rows(Stream::Customer), Some(180));
        assert_eq!(metrics.rows(Stream::Item), Some(50));
        assert_eq!(metrics.rows(Stream::Supplier), Some(20));
        assert_eq!(metrics.rows(Stream::Stock), Some(150));
        assert_eq!(metrics.rows(Stream::Order), Some(180));
        assert_eq!(metrics.rows(Stream::Region), Some(5));
        assert_eq!(metrics.rows(Stream::Nation), Some(62));

        let ids = populator.ids();
        assert_eq!(ids.customer.last(), 180);
        assert_eq!(ids.stock.last(), 150);
        assert_eq!(ids.order_line.last(), metrics.rows(Stream::OrderLine).unwrap());
    }

    #[test]
    fn test_entity_ids_are_sequential() {
        let temp_dir = TempDir::new().unwrap();
        GraphPopulator::new(small_config(temp_dir.path(), 2))
            .unwrap()
            .run()
            .unwrap();

        for stream in [
            Stream::Warehouse,
            Stream::District,
            Stream::Customer,
            Stream::Item,
            Stream::Supplier,
            Stream::Stock,
            Stream::Order,
            Stream::OrderLine,
        ] {
            let ids = column(&read_rows(temp_dir.path(), stream), 0);
            let expected: Vec<u64> = (1..=ids.len() as u64).collect();
            assert_eq!(ids, expected, "{stream:?}");
        }
    }

    #[test]
    fn test_referential_integrity() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        GraphPopulator::new(small_config(dir, 2)).unwrap().run().unwrap();

        let ids = |stream: Stream| -> HashSet<u64> {
            column(&read_rows(dir, stream), 0).into_iter().collect()
        };
        let warehouses = ids(Stream::Warehouse);
        let districts = ids(Stream::District);
        let customers = ids(Stream::Customer);
        let items = ids(Stream::Item);
        let suppliers = ids(Stream::Supplier);
        let stock = ids(Stream::Stock);
        let orders = ids(Stream::Order);
        let lines = ids(Stream::OrderLine);
        let regions = ids(Stream::Region);
        let nations = ids(Stream::Nation);

        let edges = [
            (Stream::WarehouseCoversDistrict, &warehouses, &districts),
            (Stream::DistrictServesCustomer, &districts, &customers),
            (Stream::CustomerIsLocatedInNation, &customers, &nations),
            (Stream::SupplierIsLocatedInNation, &suppliers, &nations),
            (Stream::WarehouseHasStock, &warehouses, &stock),
            (Stream::ItemHasStock, &items, &stock),
            (Stream::CustomerHasPlacedOrder, &customers, &orders),
            (Stream::OrderContainsOrderLine, &orders, &lines),
            (Stream::OrderLineHasStock, &lines, &stock),
            (Stream::NationIsPartOfRegion, &nations, &regions),
        ];
        for (stream, from, to) in edges {
            for row in read_rows(dir, stream) {
                let a: u64 = row[0].parse().unwrap();
                let b: u64 = row[1].parse().unwrap();
                assert!(from.contains(&a), "{stream:?}: {a}");
                assert!(to.contains(&b), "{stream:?}: {b}");
            }
        }
    }

    #[test]
    fn test_orders_are_a_bijection_over_customers() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        GraphPopulator::new(small_config(dir, 2)).unwrap().run().unwrap();

        let placed = read_rows(dir, Stream::CustomerHasPlacedOrder);
        let mut customers = column(&placed, 0);
        let orders = column(&placed, 1);
        assert_eq!(orders, (1..=120).collect::<Vec<u64>>());

        // Not generated district by district.
        assert_ne!(customers, (1..=120).collect::<Vec<u64>>());
        customers.sort_unstable();
        assert_eq!(customers, (1..=120).collect::<Vec<u64>>());
    }

    #[test]
    fn test_late_orders() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        GraphPopulator::new(small_config(dir, 1)).unwrap().run().unwrap();

        let orders = read_rows(dir, Stream::Order);
        let mut late_orders = HashSet::new();
        for (index, order) in orders.iter().enumerate() {
            let seq = index as u32 % 30 + 1;
            if seq > 21 {
                assert_eq!(order[2], "0");
                assert_eq!(order[5], "1");
                late_orders.insert(order[0].clone());
            } else {
                let carrier: u32 = order[2].parse().unwrap();
                assert!((1..=10).contains(&carrier));
                assert_eq!(order[5], "0");
            }
            let line_count: u32 = order[3].parse().unwrap();
            assert!((5..=15).contains(&line_count));
            assert_eq!(order[4], "1");
        }
        assert_eq!(late_orders.len(), 2 * 9);

        let contains = read_rows(dir, Stream::OrderContainsOrderLine);
        let lines = read_rows(dir, Stream::OrderLine);
        assert_eq!(contains.len(), lines.len());
        for (edge, line) in contains.iter().zip(&lines) {
            assert_eq!(edge[1], line[0]);
            assert_eq!(line[3], "5");
            if late_orders.contains(&edge[0]) {
                assert_eq!(line[2], gtpc_generator::NULL_DATE);
                let amount: f64 = line[4].parse().unwrap();
                assert!((0.10..=100.00).contains(&amount));
            } else {
                assert_ne!(line[2], gtpc_generator::NULL_DATE);
                assert_eq!(line[4], "0.00");
            }
        }
    }

    #[test]
    fn test_order_lines_reference_own_warehouse_stock() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        GraphPopulator::new(small_config(dir, 2)).unwrap().run().unwrap();

        let lines = read_rows(dir, Stream::OrderLine).len();
        let contains = read_rows(dir, Stream::OrderContainsOrderLine);
        let has_stock = read_rows(dir, Stream::OrderLineHasStock);
        assert_eq!(has_stock.len(), lines);
        for (edge, stock) in contains.iter().zip(&has_stock) {
            let order: u64 = edge[0].parse().unwrap();
            let stock_id: u64 = stock[1].parse().unwrap();
            // 60 orders and 50 stock rows per warehouse.
            let warehouse = (order - 1) / 60 + 1;
            assert!(stock_id > 50 * (warehouse - 1) && stock_id <= 50 * warehouse);
        }
    }

    #[test]
    fn test_original_marking() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let scale = Scale {
            items: 200,
            ..small_scale()
        };
        GraphPopulator::new(PopulateConfig::new(dir, 3).with_scale(scale))
            .unwrap()
            .run()
            .unwrap();

        let marked = |row: &Vec<String>| row.last().unwrap().contains("ORIGINAL");
        let items = read_rows(dir, Stream::Item);
        assert_eq!(items.iter().filter(|r| marked(r)).count(), 20);

        let stock = read_rows(dir, Stream::Stock);
        for warehouse in stock.chunks(200) {
            assert_eq!(warehouse.iter().filter(|r| marked(r)).count(), 20);
        }
        assert!(stock
            .iter()
            .all(|r| (26..=50).contains(&r.last().unwrap().len())));
    }

    #[test]
    fn test_supplier_ids_modulo_and_one_based() {
        let temp_dir = TempDir::new().unwrap();
        let modulo_dir = temp_dir.path().join("modulo");
        let one_based_dir = temp_dir.path().join("one-based");
        fs::create_dir(&modulo_dir).unwrap();
        fs::create_dir(&one_based_dir).unwrap();

        GraphPopulator::new(small_config(&modulo_dir, 2))
            .unwrap()
            .run()
            .unwrap();
        GraphPopulator::new(
            small_config(&one_based_dir, 2)
                .with_supplier_ids(crate::session::SupplierIdMapping::OneBased),
        )
        .unwrap()
        .run()
        .unwrap();

        let modulo = column(&read_rows(&modulo_dir, Stream::StockHasSupplier), 1);
        assert!(modulo.iter().all(|&s| s < 20));
        assert!(modulo.contains(&0));
        // Item 20 of warehouse 1.
        assert_eq!(modulo[19], 0);
        assert_eq!(modulo[20], 1);

        let one_based = column(&read_rows(&one_based_dir, Stream::StockHasSupplier), 1);
        assert!(one_based.iter().all(|&s| (1..=20).contains(&s)));
        assert_eq!(one_based[19], 20);

        // The mapping does not consume randomness.
        assert_eq!(
            fs::read(modulo_dir.join(Stream::Stock.file_name())).unwrap(),
            fs::read(one_based_dir.join(Stream::Stock.file_name())).unwrap()
        );
    }

    #[test]
    fn test_determinism() {
        let temp_dir = TempDir::new().unwrap();
        let run = |name: &str, seed: u64| {
            let dir = temp_dir.path().join(name);
            fs::create_dir(&dir).unwrap();
            GraphPopulator::new(small_config(&dir, 2).with_seed(seed))
                .unwrap()
                .run()
                .unwrap();
            dir
        };
        let first = run("first", 7);
        let second = run("second", 7);
        let other = run("other", 8);

        for stream in Stream::ALL {
            let a = fs::read(first.join(stream.file_name())).unwrap();
            let b = fs::read(second.join(stream.file_name())).unwrap();
            assert_eq!(a, b, "{stream:?}");
        }
        assert_ne!(
            fs::read(first.join(Stream::Customer.file_name())).unwrap(),
            fs::read(other.join(Stream::Customer.file_name())).unwrap()
        );
    }

    #[test]
    fn test_generate_requires_dependencies() {
        let temp_dir = TempDir::new().unwrap();
        let mut populator = GraphPopulator::new(small_config(temp_dir.path(), 1)).unwrap();

        let err = populator.generate(Entity::Stock).unwrap_err();
        assert!(matches!(
            err,
            PopulateError::Plan(PlanError::MissingDependency {
                entity: Entity::Stock,
                dependency: Entity::Warehouse,
            })
        ));
        assert!(!temp_dir.path().join(Stream::Stock.file_name()).exists());

        populator.generate(Entity::Region).unwrap();
        assert!(matches!(
            populator.generate(Entity::Region),
            Err(PopulateError::AlreadyGenerated(Entity::Region))
        ));
        populator.generate(Entity::Nation).unwrap();
        assert_eq!(populator.completed(), &[Entity::Region, Entity::Nation]);

        // The rest of the plan still runs.
        let metrics = populator.run().unwrap();
        assert_eq!(metrics.entities.len(), GENERATION_ORDER.len() - 2);
        assert_eq!(metrics.rows(Stream::Nation), None);
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        let temp_dir = TempDir::new().unwrap();
        assert!(GraphPopulator::new(small_config(temp_dir.path(), 0)).is_err());
        assert!(GraphPopulator::new(small_config(&temp_dir.path().join("x"), 1)).is_err());

        let scale = Scale {
            suppliers: 0,
            ..small_scale()
        };
        let config = PopulateConfig::new(temp_dir.path(), 1).with_scale(scale);
        assert!(GraphPopulator::new(config).is_err());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
