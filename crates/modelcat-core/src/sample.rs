//! Built-in sample catalog.
//!
//! One repository with two catalogs. `cat-1` holds two libraries of two
//! models each; `cat-2` holds a single-model library and an empty archive.

use crate::catalog::{Forest, ModelKind, ModelMetadata, TreeNode};
use crate::error::Result;
use chrono::{DateTime, TimeZone, Utc};

fn stamp(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

/// The sample forest shown when no catalog file is given.
pub fn sample_forest() -> Result<Forest> {
    Forest::new(vec![sample_repository()])
}

fn sample_repository() -> TreeNode {
    TreeNode::repository("repo-1", "Enterprise Data Repository").with_children([
        TreeNode::catalog("cat-1", "Sales & Marketing").with_children([
            TreeNode::library("lib-1", "Customer Models").with_children([
                customer_master(),
                customer_segmentation(),
            ]),
            TreeNode::library("lib-2", "Order Management")
                .with_children([order_processing(), sales_analytics()]),
        ]),
        TreeNode::catalog("cat-2", "Finance").with_children([
            TreeNode::library("lib-3", "General Ledger").with_child(general_ledger()),
            TreeNode::library("lib-4", "Archived Models"),
        ]),
    ])
}

fn customer_master() -> TreeNode {
    let meta = ModelMetadata::new(
        ModelKind::Physical,
        "PostgreSQL 15",
        "2.3.1",
        stamp(2024, 1, 15, 10, 30),
        "John Smith",
    )
    .with_counts(24, 5, 31, 287)
    .with_description("Master data model for customer information across all channels")
    .with_created("Sarah Johnson", stamp(2023, 6, 1, 9, 0))
    .with_location("/Enterprise/Sales & Marketing/Customer Models")
    .with_tags(["customer", "master-data", "crm"]);
    TreeNode::model("model-1", "Customer Master", meta)
}

fn customer_segmentation() -> TreeNode {
    let meta = ModelMetadata::new(
        ModelKind::Logical,
        "PostgreSQL 15",
        "1.4.0",
        stamp(2024, 1, 12, 14, 5),
        "Emily Davis",
    )
    .checked_out("Emily Davis")
    .with_counts(9, 2, 11, 96)
    .with_description("Customer segments and scoring attributes for campaign targeting")
    .with_created("Emily Davis", stamp(2023, 9, 18, 11, 20))
    .with_location("/Enterprise/Sales & Marketing/Customer Models")
    .with_tags(["customer", "marketing", "analytics"]);
    TreeNode::model("model-2", "Customer Segmentation", meta)
}

fn order_processing() -> TreeNode {
    let meta = ModelMetadata::new(
        ModelKind::Physical,
        "Oracle 19c",
        "3.0.2",
        stamp(2024, 1, 10, 8, 45),
        "Michael Chen",
    )
    .locked()
    .with_counts(31, 8, 42, 356)
    .with_description("Order lifecycle from capture through fulfillment and invoicing")
    .with_created("Michael Chen", stamp(2022, 11, 3, 16, 0))
    .with_location("/Enterprise/Sales & Marketing/Order Management")
    .with_tags(["orders", "oltp", "fulfillment"]);
    TreeNode::model("model-3", "Order Processing", meta)
}

fn sales_analytics() -> TreeNode {
    let meta = ModelMetadata::new(
        ModelKind::Dimensional,
        "Snowflake",
        "1.1.0",
        stamp(2024, 1, 8, 17, 15),
        "Lisa Wong",
    )
    .with_counts(14, 6, 13, 168)
    .with_description("Star schema for sales reporting by region, product, and period")
    .with_created("Lisa Wong", stamp(2023, 3, 27, 10, 10))
    .with_location("/Enterprise/Sales & Marketing/Order Management")
    .with_tags(["sales", "warehouse", "reporting"]);
    TreeNode::model("model-4", "Sales Analytics", meta)
}

fn general_ledger() -> TreeNode {
    let meta = ModelMetadata::new(
        ModelKind::Physical,
        "SQL Server 2022",
        "4.2.0",
        stamp(2024, 1, 5, 9, 0),
        "Robert Taylor",
    )
    .checked_out("Robert Taylor")
    .with_counts(42, 10, 55, 512)
    .with_description("Chart of accounts, journals, and period balances")
    .with_created("Robert Taylor", stamp(2021, 7, 12, 13, 30))
    .with_location("/Enterprise/Finance/General Ledger")
    .with_tags(["finance", "gl", "compliance"]);
    TreeNode::model("model-5", "General Ledger Core", meta)
}
