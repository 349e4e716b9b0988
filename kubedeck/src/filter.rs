use crate::utils::SortValue;

/// Filter `data` by a case-insensitive substring match on a single field.
///
/// A row is kept when the accessor yields text containing `query`, or when it
/// yields no text at all — fields without a string form (numbers, absent
/// values) pass through unfiltered rather than being excluded.
#[tracing::instrument(skip(data, get_field_value), fields(row_count = data.len()))]
pub fn filter_rows<'a, T, F>(
    data: &'a [T],
    query: &str,
    field: &str,
    get_field_value: F,
) -> Vec<&'a T>
where
    F: Fn(&T, &str) -> Option<SortValue>,
{
    if query.is_empty() {
        return data.iter().collect();
    }

    let needle = query.to_lowercase();

    data.iter()
        .filter(|item| match get_field_value(item, field) {
            Some(SortValue::Text(value)) => value.to_lowercase().contains(&needle),
            // Permissive default: non-text fields never exclude a row.
            Some(SortValue::Number(_)) | None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
        restarts: i64,
    }

    fn accessor(item: &Item, field: &str) -> Option<SortValue> {
        match field {
            "name" => Some(SortValue::Text(item.name.to_string())),
            "restarts" => Some(SortValue::Number(item.restarts)),
            _ => None,
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let data = vec![
            Item { name: "Alpha", restarts: 0 },
            Item { name: "beta", restarts: 1 },
        ];

        let kept = filter_rows(&data, "AL", "name", accessor);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Alpha");
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let data = vec![
            Item { name: "a", restarts: 0 },
            Item { name: "b", restarts: 0 },
        ];
        assert_eq!(filter_rows(&data, "", "name", accessor).len(), 2);
    }

    #[test]
    fn test_non_text_fields_pass_through() {
        let data = vec![
            Item { name: "a", restarts: 3 },
            Item { name: "b", restarts: 42 },
        ];
        // Filtering on a numeric field excludes nothing.
        assert_eq!(filter_rows(&data, "4", "restarts", accessor).len(), 2);
        // Same for a field the accessor does not know.
        assert_eq!(filter_rows(&data, "4", "missing", accessor).len(), 2);
    }
}
