//! Output stream catalog: file names and column headers.

/// Suffix shared by every output file.
pub const FILE_SUFFIX: &str = "_0_0.csv";

/// One output file, either an entity stream or an edge stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Warehouse,
    District,
    WarehouseCoversDistrict,
    Customer,
    DistrictServesCustomer,
    CustomerIsLocatedInNation,
    Item,
    Supplier,
    SupplierIsLocatedInNation,
    Stock,
    WarehouseHasStock,
    ItemHasStock,
    StockHasSupplier,
    Order,
    OrderLine,
    CustomerHasPlacedOrder,
    OrderContainsOrderLine,
    OrderLineHasStock,
    Region,
    Nation,
    NationIsPartOfRegion,
}

impl Stream {
    pub const ALL: [Stream; 21] = [
        Stream::Warehouse,
        Stream::District,
        Stream::WarehouseCoversDistrict,
        Stream::Customer,
        Stream::DistrictServesCustomer,
        Stream::CustomerIsLocatedInNation,
        Stream::Item,
        Stream::Supplier,
        Stream::SupplierIsLocatedInNation,
        Stream::Stock,
        Stream::WarehouseHasStock,
        Stream::ItemHasStock,
        Stream::StockHasSupplier,
        Stream::Order,
        Stream::OrderLine,
        Stream::CustomerHasPlacedOrder,
        Stream::OrderContainsOrderLine,
        Stream::OrderLineHasStock,
        Stream::Region,
        Stream::Nation,
        Stream::NationIsPartOfRegion,
    ];

    /// File name stem, without [`FILE_SUFFIX`].
    pub fn name(self) -> &'static str {
        match self {
            Stream::Warehouse => "warehouse",
            Stream::District => "district",
            Stream::WarehouseCoversDistrict => "warehouse_covers_district",
            Stream::Customer => "customer",
            Stream::DistrictServesCustomer => "district_serves_customer",
            Stream::CustomerIsLocatedInNation => "customer_isLocatedIn_nation",
            Stream::Item => "item",
            Stream::Supplier => "supplier",
            Stream::SupplierIsLocatedInNation => "supplier_isLocatedIn_nation",
            Stream::Stock => "stock",
            Stream::WarehouseHasStock => "warehouse_hasStock_stock",
            Stream::ItemHasStock => "item_hasStock_stock",
            Stream::StockHasSupplier => "stock_hasSupplier_supplier",
            Stream::Order => "order",
            Stream::OrderLine => "orderLine",
            Stream::CustomerHasPlacedOrder => "customer_hasPlaced_order",
            Stream::OrderContainsOrderLine => "order_contains_orderLine",
            Stream::OrderLineHasStock => "orderLine_hasStock_stock",
            Stream::Region => "region",
            Stream::Nation => "nation",
            Stream::NationIsPartOfRegion => "nation_isPartOf_region",
        }
    }

    /// Full output file name.
    pub fn file_name(self) -> String {
        format!("{}{FILE_SUFFIX}", self.name())
    }

    /// Column names of the header record.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Stream::Warehouse => &[
                "id", "name", "street_1", "street_2", "city", "state", "zip", "tax", "ytd",
            ],
            Stream::District => &[
                "id",
                "name",
                "street_1",
                "street_2",
                "city",
                "state",
                "zip",
                "tax",
                "ytd",
                "next_o_id",
            ],
            Stream::WarehouseCoversDistrict => &["Warehouse_id", "District_id"],
            Stream::Customer => &[
                "id",
                "first",
                "middle",
                "last",
                "street_1",
                "street_2",
                "city",
                "state",
                "zip",
                "phone",
                "since",
                "credit",
                "credit_lim",
                "discount",
                "balance",
                "ytd_payment",
                "payment_cnt",
                "delivery_cnt",
                "data",
                "history_date",
                "history_amount",
                "history_data",
            ],
            Stream::DistrictServesCustomer => &["District_id", "Customer_id"],
            Stream::CustomerIsLocatedInNation => &["Customer_id", "Nation_id"],
            Stream::Item => &["id", "im_id", "name", "price", "data"],
            Stream::Supplier => &["id", "name", "address", "phone", "acctbal", "comment"],
            Stream::SupplierIsLocatedInNation => &["Supplier_id", "Nation_id"],
            Stream::Stock => &[
                "id",
                "quantity",
                "dist_01",
                "dist_02",
                "dist_03",
                "dist_04",
                "dist_05",
                "dist_06",
                "dist_07",
                "dist_08",
                "dist_09",
                "dist_10",
                "ytd",
                "order_cnt",
                "remote_cnt",
                "data",
            ],
            Stream::WarehouseHasStock => &["Warehouse_id", "Stock_id"],
            Stream::ItemHasStock => &["Item_id", "Stock_id"],
            Stream::StockHasSupplier => &["Stock_id", "Supplier_id"],
            Stream::Order => &[
                "id",
                "entry_d",
                "carrier_id",
                "ol_cnt",
                "all_local",
                "new_order",
            ],
            Stream::OrderLine => &[
                "id",
                "number",
                "delivery_d",
                "quantity",
                "amount",
                "dist_info",
            ],
            Stream::CustomerHasPlacedOrder => &["Customer_id", "Order_id"],
            Stream::OrderContainsOrderLine => &["Order_id", "OrderLine_id"],
            Stream::OrderLineHasStock => &["OrderLine_id", "Stock_id"],
            Stream::Region => &["id", "name", "comment"],
            Stream::Nation => &["id", "name", "comment"],
            Stream::NationIsPartOfRegion => &["Nation_id", "Region_id"],
        }
    }

    /// The header line as written to the file, without terminator.
    pub fn header(self) -> String {
        self.columns().join("|")
    }
}
