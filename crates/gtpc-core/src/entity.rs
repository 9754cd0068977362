//! Entity types and the order in which they have to be generated.
//!
//! Later routines consume id ranges or counts produced by earlier ones: the
//! stock routine needs the warehouse, item and supplier populations, the
//! order routine needs the full customer range for its permutation and the
//! stock layout for its order lines. [`Entity::dependencies`] states these
//! edges and [`validate_order`] checks a generation sequence against them.
//!
//! Nation references from customers and suppliers resolve against the static
//! catalog, so they do not constrain the order.

use crate::stream::Stream;
use std::fmt;

/// An entity generation routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entity {
    Warehouse,
    District,
    Customer,
    Item,
    Supplier,
    Stock,
    Order,
    Region,
    Nation,
}

/// The fixed generation order used by the orchestrator.
pub const GENERATION_ORDER: [Entity; 9] = [
    Entity::Warehouse,
    Entity::District,
    Entity::Customer,
    Entity::Item,
    Entity::Supplier,
    Entity::Stock,
    Entity::Order,
    Entity::Region,
    Entity::Nation,
];

/// Error type for generation plans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// An entity appears before one of its dependencies
    #[error("{entity} must be generated after {dependency}")]
    MissingDependency { entity: Entity, dependency: Entity },

    /// An entity appears twice
    #[error("{0} appears more than once in the generation plan")]
    Duplicate(Entity),
}

impl Entity {
    /// Entities whose output this routine consumes.
    pub fn dependencies(self) -> &'static [Entity] {
        match self {
            Entity::Warehouse | Entity::Item | Entity::Supplier | Entity::Region => &[],
            Entity::District => &[Entity::Warehouse],
            Entity::Customer => &[Entity::District],
            Entity::Stock => &[Entity::Warehouse, Entity::Item, Entity::Supplier],
            Entity::Order => &[Entity::Customer, Entity::Stock],
            Entity::Nation => &[Entity::Region],
        }
    }

    /// Streams written by this routine: the entity stream first, then its
    /// relationship streams.
    pub fn streams(self) -> &'static [Stream] {
        match self {
            Entity::Warehouse => &[Stream::Warehouse],
            Entity::District => &[Stream::District, Stream::WarehouseCoversDistrict],
            Entity::Customer => &[
                Stream::Customer,
                Stream::DistrictServesCustomer,
                Stream::CustomerIsLocatedInNation,
            ],
            Entity::Item => &[Stream::Item],
            Entity::Supplier => &[Stream::Supplier, Stream::SupplierIsLocatedInNation],
            Entity::Stock => &[
                Stream::Stock,
                Stream::WarehouseHasStock,
                Stream::ItemHasStock,
                Stream::StockHasSupplier,
            ],
            Entity::Order => &[
                Stream::Order,
                Stream::OrderLine,
                Stream::CustomerHasPlacedOrder,
                Stream::OrderContainsOrderLine,
                Stream::OrderLineHasStock,
            ],
            Entity::Region => &[Stream::Region],
            Entity::Nation => &[Stream::Nation, Stream::NationIsPartOfRegion],
        }
    }

    /// Human-readable description used in progress logs.
    pub fn description(self) -> &'static str {
        match self {
            Entity::Warehouse => "'Warehouse' node objects",
            Entity::District => "'District' node objects and ':covers' relationship objects",
            Entity::Customer => {
                "'Customer' node objects and ':serves', ':cIsLocatedIn' relationship objects"
            }
            Entity::Item => "'Item' node objects",
            Entity::Supplier => "'Supplier' node objects and ':sIsLocatedIn' relationship objects",
            Entity::Stock => {
                "'Stock' node objects and ':wHasStock', ':iHasStock', ':hasSupplier' relationship objects"
            }
            Entity::Order => {
                "'Order', 'OrderLine' node objects and ':hasPlaced', ':contains', ':olHasStock' relationship objects"
            }
            Entity::Region => "'Region' node objects",
            Entity::Nation => "'Nation' node objects and ':isPartOf' relationship objects",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Warehouse => "Warehouse",
            Entity::District => "District",
            Entity::Customer => "Customer",
            Entity::Item => "Item",
            Entity::Supplier => "Supplier",
            Entity::Stock => "Stock",
            Entity::Order => "Order",
            Entity::Region => "Region",
            Entity::Nation => "Nation",
        };
        write!(f, "{name}")
    }
}

/// Check that every entity in `order` appears once and after all of its
/// dependencies. The plan may be partial, but then every dependency of a
/// listed entity must be listed too.
pub fn validate_order(order: &[Entity]) -> Result<(), PlanError> {
    for (pos, entity) in order.iter().enumerate() {
        if order[..pos].contains(entity) {
            return Err(PlanError::Duplicate(*entity));
        }
        for dependency in entity.dependencies() {
            if !order[..pos].contains(dependency) {
                return Err(PlanError::MissingDependency {
                    entity: *entity,
                    dependency: *dependency,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generation_order_is_valid() {
        assert_eq!(validate_order(&GENERATION_ORDER), Ok(()));
    }

    #[test]
    fn test_order_before_customers_is_rejected() {
        let plan = [
            Entity::Warehouse,
            Entity::District,
            Entity::Item,
            Entity::Supplier,
            Entity::Stock,
            Entity::Order,
            Entity::Customer,
        ];
        assert_eq!(
            validate_order(&plan),
            Err(PlanError::MissingDependency {
                entity: Entity::Order,
                dependency: Entity::Customer,
            })
        );
    }

    #[test]
    fn test_stock_needs_suppliers() {
        let plan = [Entity::Warehouse, Entity::Item, Entity::Stock];
        assert_eq!(
            validate_order(&plan),
            Err(PlanError::MissingDependency {
                entity: Entity::Stock,
                dependency: Entity::Supplier,
            })
        );
    }

    #[test]
    fn test_duplicates_are_rejected() {
        let plan = [Entity::Region, Entity::Region];
        assert_eq!(
            validate_order(&plan),
            Err(PlanError::Duplicate(Entity::Region))
        );
    }

    #[test]
    fn test_every_stream_has_one_owner() {
        let mut seen = HashSet::new();
        for entity in GENERATION_ORDER {
            for stream in entity.streams() {
                assert!(seen.insert(*stream), "{stream:?} listed twice");
            }
        }
        assert_eq!(seen.len(), Stream::ALL.len());
    }
}
