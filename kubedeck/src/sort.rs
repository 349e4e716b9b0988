use std::cmp::Ordering;

use crate::utils::SortValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flip(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Stable-sorts `data` by the value the accessor yields for `field`.
///
/// Text compares case-insensitively, numbers numerically. A pair of
/// mismatched or missing values compares equal, so the stable sort leaves
/// their relative order untouched instead of guessing.
#[tracing::instrument(skip(data, get_field_value), fields(row_count = data.len()))]
pub fn sort_rows<T, F>(data: &mut [T], field: &str, order: SortOrder, get_field_value: F)
where
    F: Fn(&T, &str) -> Option<SortValue>,
{
    data.sort_by(|a, b| {
        let cmp = match (get_field_value(a, field), get_field_value(b, field)) {
            (Some(SortValue::Text(a_val)), Some(SortValue::Text(b_val))) => {
                a_val.to_lowercase().cmp(&b_val.to_lowercase())
            }
            (Some(SortValue::Number(a_val)), Some(SortValue::Number(b_val))) => a_val.cmp(&b_val),
            _ => Ordering::Equal,
        };

        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: &'static str,
        count: i64,
    }

    fn accessor(item: &Item, field: &str) -> Option<SortValue> {
        match field {
            "name" => Some(SortValue::Text(item.name.to_string())),
            "count" => Some(SortValue::Number(item.count)),
            _ => None,
        }
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let mut data = vec![
            Item { name: "beta", count: 0 },
            Item { name: "Alpha", count: 0 },
            Item { name: "gamma", count: 0 },
        ];
        sort_rows(&mut data, "name", SortOrder::Asc, accessor);
        let names: Vec<_> = data.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_numeric_sort_desc() {
        let mut data = vec![
            Item { name: "a", count: 1 },
            Item { name: "b", count: 42 },
            Item { name: "c", count: 7 },
        ];
        sort_rows(&mut data, "count", SortOrder::Desc, accessor);
        let counts: Vec<_> = data.iter().map(|i| i.count).collect();
        assert_eq!(counts, vec![42, 7, 1]);
    }

    #[test]
    fn test_equal_values_keep_relative_order() {
        let mut data = vec![
            Item { name: "first", count: 5 },
            Item { name: "second", count: 5 },
            Item { name: "third", count: 1 },
            Item { name: "fourth", count: 5 },
        ];
        sort_rows(&mut data, "count", SortOrder::Asc, accessor);
        let names: Vec<_> = data.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["third", "first", "second", "fourth"]);

        // Stability holds in both directions.
        sort_rows(&mut data, "count", SortOrder::Desc, accessor);
        let names: Vec<_> = data.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["first", "second", "fourth", "third"]);
    }

    #[test]
    fn test_unknown_field_leaves_order_untouched() {
        let mut data = vec![
            Item { name: "b", count: 2 },
            Item { name: "a", count: 1 },
        ];
        sort_rows(&mut data, "missing", SortOrder::Asc, accessor);
        assert_eq!(data[0].name, "b");
        assert_eq!(data[1].name, "a");
    }

    #[test]
    fn test_flip() {
        assert_eq!(SortOrder::Asc.flip(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flip(), SortOrder::Asc);
    }
}
