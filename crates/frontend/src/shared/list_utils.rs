/// List helpers shared by the table screens (sorting and header indicators)
use std::cmp::Ordering;

/// Trait for rows that support column sorting
pub trait Sortable {
    /// Compares two rows by the named column
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts rows by the named column
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Header indicator for the active sort column
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}
