//! Child filters for filtering panels
//!
//! A panel with a filter installed silently rejects widgets the filter does
//! not accept. The search box composes with a button list this way: each
//! refresh re-adds every button and only the matching ones stick.

use std::rc::Rc;

use crate::widget::Widget;

/// Decides whether a panel accepts a widget
pub trait ChildFilter {
    fn accepts(&self, widget: &dyn Widget) -> bool;
}

impl<F> ChildFilter for F
where
    F: Fn(&dyn Widget) -> bool,
{
    fn accepts(&self, widget: &dyn Widget) -> bool {
        self(widget)
    }
}

/// Extracts the text a widget is searched by
pub type FilterTextFn = Rc<dyn Fn(&dyn Widget) -> String>;

/// Default search key: the widget's title, lowercased
pub fn default_filter_text(widget: &dyn Widget) -> String {
    widget.title().to_lowercase()
}

/// Case-insensitive substring match of a widget's filter text against a query
#[derive(Clone)]
pub struct SearchFilter {
    query: String,
    filter_text: FilterTextFn,
}

impl SearchFilter {
    pub fn new(query: &str, filter_text: FilterTextFn) -> Self {
        Self {
            query: query.to_lowercase(),
            filter_text,
        }
    }

    /// Filter on widget titles
    pub fn by_title(query: &str) -> Self {
        Self::new(query, Rc::new(default_filter_text))
    }

    /// The lowercased query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether `text` matches; the empty query matches everything
    pub fn matches(&self, text: &str) -> bool {
        self.query.is_empty() || text.to_lowercase().contains(&self.query)
    }
}

impl ChildFilter for SearchFilter {
    fn accepts(&self, widget: &dyn Widget) -> bool {
        self.matches(&(self.filter_text)(widget))
    }
}

impl std::fmt::Debug for SearchFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchFilter")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Button;

    #[test]
    fn test_case_insensitive_substring() {
        let titles = ["Iron Ingot", "Gold Ingot", "Iron Sword", "Stick"];

        for (query, expected) in [
            ("", 4),
            ("iron", 2),
            ("INGOT", 2),
            ("n s", 1),
            ("diamond", 0),
        ] {
            let filter = SearchFilter::by_title(query);
            let accepted = titles
                .iter()
                .filter(|t| filter.accepts(&Button::new(**t)))
                .count();
            assert_eq!(accepted, expected, "query {query:?}");
        }
    }

    #[test]
    fn test_custom_filter_text() {
        // search by a tag instead of the title
        let filter = SearchFilter::new("TOOL", Rc::new(|w: &dyn Widget| format!("{} tool", w.title())));
        assert!(filter.accepts(&Button::new("Hammer")));
        assert_eq!(filter.query(), "tool");
    }

    #[test]
    fn test_closure_filter() {
        let short_only = |w: &dyn Widget| w.title().len() < 4;
        assert!(short_only.accepts(&Button::new("Axe")));
        assert!(!short_only.accepts(&Button::new("Shovel")));
    }
}
