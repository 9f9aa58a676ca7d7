//! FAQ grouping for the public FAQ page.

use serde::Serialize;

/// Category used for FAQs stored without one.
pub const UNCATEGORIZED: &str = "General";

/// A run of FAQs sharing a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqGroup<T> {
    pub category: String,
    pub items: Vec<T>,
}

/// Group `items` by the category returned from `category_of`.
///
/// Groups appear in the order their category is first seen and items keep
/// their relative order, so callers control both through the input order.
/// Missing or blank categories fall under [`UNCATEGORIZED`].
pub fn group_by_category<T, F>(items: Vec<T>, category_of: F) -> Vec<FaqGroup<T>>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut groups: Vec<FaqGroup<T>> = Vec::new();
    for item in items {
        let category = category_of(&item)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED)
            .to_string();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.items.push(item),
            None => groups.push(FaqGroup {
                category,
                items: vec![item],
            }),
        }
    }
    groups
}
