//! Assertion helpers for element lists.

use codescope::{Element, Topic};

/// Elements that carry a topic, as (title, symbol) pairs in source order.
pub fn topic_summary(elements: &[Element]) -> Vec<(String, String)> {
    elements
        .iter()
        .filter_map(|e| e.topic.as_ref())
        .map(|t| (t.title.clone(), t.symbol.to_string()))
        .collect()
}

/// Titles of every topic in source order.
pub fn topic_titles(elements: &[Element]) -> Vec<String> {
    elements
        .iter()
        .filter_map(|e| e.topic.as_ref())
        .map(|t| t.title.clone())
        .collect()
}

/// The element whose topic has the given symbol, formatted with `.`.
pub fn get_element<'a>(elements: &'a [Element], symbol: &str) -> &'a Element {
    elements
        .iter()
        .find(|e| e.topic.as_ref().is_some_and(|t| t.symbol.to_string() == symbol))
        .unwrap_or_else(|| panic!("Expected an element with symbol '{}' in {:?}", symbol, topic_summary(elements)))
}

/// The topic with the given symbol.
pub fn get_topic<'a>(elements: &'a [Element], symbol: &str) -> &'a Topic {
    get_element(elements, symbol)
        .topic
        .as_ref()
        .unwrap_or_else(|| panic!("Element '{}' has no topic", symbol))
}

/// Assert the list holds only the root element.
pub fn assert_root_only(elements: &[Element]) {
    assert_eq!(
        elements.len(),
        1,
        "Expected only the root element, got {:?}",
        topic_summary(elements)
    );
    assert!(elements[0].is_root());
}

/// Assert a topic has the expected declaring keyword.
pub fn assert_keyword(topic: &Topic, expected: &str) {
    assert_eq!(
        topic.keyword, expected,
        "Expected '{}' to be declared with '{}', got '{}'",
        topic.title, expected, topic.keyword
    );
}
