//! Small helpers shared by the sortable record views.

use contracts::domain::product::ProductField;
use contracts::shared::listing::SortDirection;

/// Sort indicator for a column header: filled arrow on the active
/// column, a neutral glyph everywhere else.
pub fn sort_indicator(
    current: Option<(ProductField, SortDirection)>,
    field: ProductField,
) -> &'static str {
    match current {
        Some((active, SortDirection::Asc)) if active == field => " ▲",
        Some((active, SortDirection::Desc)) if active == field => " ▼",
        _ => " ⇅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_tracks_active_column_and_direction() {
        assert_eq!(
            sort_indicator(Some((ProductField::Price, SortDirection::Asc)), ProductField::Price),
            " ▲"
        );
        assert_eq!(
            sort_indicator(Some((ProductField::Price, SortDirection::Desc)), ProductField::Price),
            " ▼"
        );
        assert_eq!(
            sort_indicator(Some((ProductField::Price, SortDirection::Asc)), ProductField::Name),
            " ⇅"
        );
        assert_eq!(sort_indicator(None, ProductField::Name), " ⇅");
    }
}
