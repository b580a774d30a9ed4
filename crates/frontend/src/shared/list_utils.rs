/// Search and sort helpers shared by the table pages
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be matched by the search box
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Rows that can be sorted by a column key
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keep rows matching `filter`; a blank filter keeps everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&filter))
        .cloned()
        .collect()
}

/// Case-insensitive containment used by `Searchable` impls
pub fn contains_ci(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Sort column and direction of one table
#[derive(Clone, Copy)]
pub struct SortState {
    pub field: RwSignal<String>,
    pub ascending: RwSignal<bool>,
}

impl SortState {
    pub fn new(field: &str) -> Self {
        Self {
            field: RwSignal::new(field.to_string()),
            ascending: RwSignal::new(true),
        }
    }

    pub fn toggle(&self, field: &str) {
        if self.field.get_untracked() == field {
            self.ascending.update(|v| *v = !*v);
        } else {
            self.field.set(field.to_string());
            self.ascending.set(true);
        }
    }

    pub fn apply<T: Sortable>(&self, items: &mut [T]) {
        sort_list(items, &self.field.get(), self.ascending.get());
    }
}

/// Clickable header content, placed inside a `TableHeaderCell`
#[component]
pub fn SortHeader(
    sort: SortState,
    field: &'static str,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <div class="table__sortable-header" style="cursor:pointer;" on:click=move |_| sort.toggle(field)>
            {label}
            <span class="table__sort-indicator">
                {move || get_sort_indicator(&sort.field.get(), field, sort.ascending.get())}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        value: i32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "value" => self.value.cmp(&other.value),
                _ => self.name.cmp(other.name),
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.name, filter)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Berlin", value: 3 },
            Row { name: "Aachen", value: 7 },
            Row { name: "Celle", value: 1 },
        ]
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut data = rows();
        sort_list(&mut data, "value", true);
        assert_eq!(data[0].name, "Celle");
        sort_list(&mut data, "name", false);
        assert_eq!(data[0].name, "Celle");
        assert_eq!(data[2].name, "Aachen");
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(&rows(), " BER ").len(), 1);
        assert_eq!(filter_list(&rows(), "").len(), 3);
    }
}
