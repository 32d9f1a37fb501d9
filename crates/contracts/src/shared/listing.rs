//! Filter → sort → paginate over an in-memory record set.
//!
//! One pipeline serves every record view; each view only contributes its
//! searchable field list and holds its own [`ListQuery`] value. The whole
//! thing is a pure function of `(records, query)` — no hidden state.

use crate::domain::product::fields::ProductField;
use crate::domain::product::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Immutable view state threaded through the pipeline on every render.
/// `page` is 1-based; `sort` is `None` until the user picks a column.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub keyword: String,
    pub sort: Option<(ProductField, SortDirection)>,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            keyword: String::new(),
            sort: None,
            page: 1,
            page_size,
        }
    }

    /// Column-header interaction: clicking the active sort key flips the
    /// direction, clicking a new column selects it ascending.
    pub fn toggled(&self, field: ProductField) -> Self {
        let sort = match self.sort {
            Some((current, SortDirection::Asc)) if current == field => {
                Some((field, SortDirection::Desc))
            }
            Some((current, SortDirection::Desc)) if current == field => {
                Some((field, SortDirection::Asc))
            }
            _ => Some((field, SortDirection::Asc)),
        };
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_keyword(&self, keyword: String) -> Self {
        Self {
            keyword,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// One page window of the filtered/sorted sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub items: Vec<Product>,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Substring filter over the view's searchable fields.
///
/// The keyword must already be lower-cased (once per pass, by [`run`]).
/// An empty keyword matches everything; otherwise the record matches if
/// any projected field contains the keyword, case-insensitive and
/// unanchored. The keyword is a single pattern — no multi-term queries.
pub fn matches(product: &Product, fields: &[ProductField], keyword_lower: &str) -> bool {
    if keyword_lower.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.text(product).to_lowercase().contains(keyword_lower))
}

/// Filter the full set by keyword, sort by the selected column if any,
/// then slice the requested window.
///
/// The sort is stable, so records comparing equal keep their input
/// order. A page past the end yields an empty window; clamping is the
/// pagination control's job, not the pipeline's.
pub fn run(records: &[Product], searchable: &[ProductField], query: &ListQuery) -> ListPage {
    let keyword_lower = query.keyword.to_lowercase();

    let mut filtered: Vec<Product> = records
        .iter()
        .filter(|p| matches(p, searchable, &keyword_lower))
        .cloned()
        .collect();

    if let Some((field, direction)) = query.sort {
        filtered.sort_by(|a, b| {
            let ordering = field.compare(a, b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(query.page_size.max(1));

    let start = query.page.saturating_sub(1) * query.page_size;
    let items: Vec<Product> = filtered
        .into_iter()
        .skip(start)
        .take(query.page_size)
        .collect();

    ListPage {
        items,
        total_count,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::aggregate::ProductDto;
    use crate::domain::product::views;

    fn product(name: &str, f: impl FnOnce(&mut ProductDto)) -> Product {
        let mut dto = ProductDto {
            name: name.into(),
            ..ProductDto::default()
        };
        f(&mut dto);
        Product::new_for_insert(dto)
    }

    fn names(page: &ListPage) -> Vec<String> {
        page.items.iter().map(|p| p.name.clone()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product("cocoa", |d| d.price = 300.0),
            product("matcha", |d| d.price = 120.0),
            product("sencha", |d| d.price = 480.0),
            product("hojicha", |d| d.price = 120.0),
            product("genmaicha", |d| d.price = 250.0),
            product("oolong", |d| d.price = 90.0),
            product("assam", |d| d.price = 410.0),
        ]
    }

    fn query() -> ListQuery {
        ListQuery::new(views::PAGE_SIZE)
    }

    #[test]
    fn empty_keyword_returns_input_unchanged_in_order() {
        let records = sample();
        let page = run(&records, views::BASIC_SEARCH_FIELDS, &ListQuery {
            page_size: 100,
            ..query()
        });
        assert_eq!(page.total_count, records.len());
        assert_eq!(
            names(&page),
            records.iter().map(|p| p.name.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn filtered_result_is_a_subset_with_matching_fields() {
        let records = sample();
        let q = ListQuery {
            keyword: "CHA".into(),
            page_size: 100,
            ..query()
        };
        let page = run(&records, views::BASIC_SEARCH_FIELDS, &q);
        assert_eq!(page.total_count, 4);
        for item in &page.items {
            assert!(item.name.to_lowercase().contains("cha"));
            assert!(records.iter().any(|r| r.id == item.id));
        }
    }

    #[test]
    fn keyword_outside_view_fields_does_not_match() {
        // storageLocation matches, but the logistics keyword must not leak
        // into a view that does not search that field.
        let records = vec![product("plain", |d| {
            d.storage_location = "North Warehouse".into();
        })];
        let q = ListQuery {
            keyword: "north".into(),
            ..query()
        };
        let logistics = run(&records, views::LOGISTICS_COLUMNS, &q);
        assert_eq!(logistics.total_count, 1);
        let basic = run(&records, views::BASIC_SEARCH_FIELDS, &q);
        assert_eq!(basic.total_count, 0);
    }

    #[test]
    fn ascending_sort_is_non_decreasing_and_descending_reverses_it() {
        let records = sample();
        let asc = run(&records, views::PRICING_COLUMNS, &ListQuery {
            sort: Some((ProductField::Price, SortDirection::Asc)),
            page_size: 100,
            ..query()
        });
        let prices: Vec<f64> = asc.items.iter().map(|p| p.price).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));

        let desc = run(&records, views::PRICING_COLUMNS, &ListQuery {
            sort: Some((ProductField::Price, SortDirection::Desc)),
            page_size: 100,
            ..query()
        });
        // Equal keys keep input order in both directions (the comparator
        // is reversed, not the slice), so check the price sequence rather
        // than element-for-element reversal.
        let desc_prices: Vec<f64> = desc.items.iter().map(|p| p.price).collect();
        assert!(desc_prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn sorting_already_sorted_input_is_idempotent() {
        let records = sample();
        let q = ListQuery {
            sort: Some((ProductField::Price, SortDirection::Asc)),
            page_size: 100,
            ..query()
        };
        let once = run(&records, views::PRICING_COLUMNS, &q);
        let twice = run(&once.items, views::PRICING_COLUMNS, &q);
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn double_direction_toggle_restores_original_order() {
        let records = sample();
        let base = query();
        let toggled_twice = base
            .toggled(ProductField::Name)
            .toggled(ProductField::Name)
            .toggled(ProductField::Name);
        // asc -> desc -> asc
        assert_eq!(
            toggled_twice.sort,
            Some((ProductField::Name, SortDirection::Asc))
        );
        let first = run(&records, views::BASIC_SEARCH_FIELDS, &ListQuery {
            sort: base.toggled(ProductField::Name).sort,
            page_size: 100,
            ..base.clone()
        });
        let third = run(&records, views::BASIC_SEARCH_FIELDS, &ListQuery {
            sort: toggled_twice.sort,
            page_size: 100,
            ..base
        });
        assert_eq!(names(&first), names(&third));
    }

    #[test]
    fn new_column_selection_resets_direction_to_ascending() {
        let q = query()
            .toggled(ProductField::Price)
            .toggled(ProductField::Price)
            .toggled(ProductField::Name);
        assert_eq!(q.sort, Some((ProductField::Name, SortDirection::Asc)));
    }

    #[test]
    fn concatenated_pages_reconstruct_the_full_sequence() {
        let records = sample();
        let q = ListQuery {
            sort: Some((ProductField::Name, SortDirection::Asc)),
            ..query()
        };
        let full = run(&records, views::BASIC_SEARCH_FIELDS, &ListQuery {
            page_size: 100,
            ..q.clone()
        });
        assert_eq!(full.total_count, 7);

        let paged = run(&records, views::BASIC_SEARCH_FIELDS, &q);
        assert_eq!(paged.total_pages, 2); // ceil(7 / 5)

        let mut collected = Vec::new();
        for page in 1..=paged.total_pages {
            let window = run(&records, views::BASIC_SEARCH_FIELDS, &q.with_page(page));
            collected.extend(names(&window));
        }
        assert_eq!(collected, names(&full));

        // Last page carries the remainder.
        let last = run(&records, views::BASIC_SEARCH_FIELDS, &q.with_page(2));
        assert_eq!(last.items.len(), 2);
    }

    #[test]
    fn out_of_range_page_yields_an_empty_window() {
        let records = sample();
        let page = run(&records, views::BASIC_SEARCH_FIELDS, &query().with_page(9));
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 7);
    }

    #[test]
    fn sales_price_tie_preserves_input_order() {
        // A: 10 * 2 = 20, B: 5 * 4 = 20 — tie on the derived field.
        let records = vec![
            product("A", |d| {
                d.price = 10.0;
                d.order_unit = 2;
            }),
            product("B", |d| {
                d.price = 5.0;
                d.order_unit = 4;
            }),
        ];
        let tie = run(&records, views::PRICING_COLUMNS, &ListQuery {
            sort: Some((ProductField::SalesPrice, SortDirection::Asc)),
            ..query()
        });
        assert_eq!(names(&tie), vec!["A", "B"]);

        let by_price = run(&records, views::PRICING_COLUMNS, &ListQuery {
            sort: Some((ProductField::Price, SortDirection::Asc)),
            ..query()
        });
        assert_eq!(names(&by_price), vec!["B", "A"]);
    }
}
