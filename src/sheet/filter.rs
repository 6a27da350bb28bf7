use serde::{Deserialize, Serialize};

use super::aggregate::AggregatedItem;

// ============================================================================
// Filter/Sort Stage - the searchable, sortable view of the master sheet
// ============================================================================
//
// Filtering is a case-insensitive substring match against the product name
// OR any contributing order name; an empty or whitespace-only term passes
// everything. Sorting by product uses case-insensitive lexicographic
// comparison; the numeric fields compare with total_cmp. Exact ties keep
// their relative order (stable sort) but callers must not rely on it.
//
// ============================================================================

/// Column to sort the sheet by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Product,
    Quantity,
    Price,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Produce a new, filtered and sorted list. The input is not mutated.
pub fn filter_and_sort(
    items: &[AggregatedItem],
    search_term: &str,
    sort_field: SortField,
    sort_direction: SortDirection,
) -> Vec<AggregatedItem> {
    let needle = search_term.trim().to_lowercase();

    let mut out: Vec<AggregatedItem> = items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.product.to_lowercase().contains(&needle)
                || item
                    .order_names
                    .iter()
                    .any(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    out.sort_by(|a, b| {
        let ordering = match sort_field {
            SortField::Product => a.product.to_lowercase().cmp(&b.product.to_lowercase()),
            SortField::Quantity => a.total_quantity.cmp(&b.total_quantity),
            SortField::Price => a.unit_price.total_cmp(&b.unit_price),
            SortField::Value => a.total_value.total_cmp(&b.total_value),
        };
        match sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    out
}

// ============================================================================
// Unit Tests
// ============================================================================
