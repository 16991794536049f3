//! HTML form field extraction.
//!
//! The portal's markup is third-party and unvalidated, so documents are
//! parsed leniently with `scraper` (html5ever) and elements are matched
//! by their `name` attribute rather than by a generated selector.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::error::ExtractError;

static INPUT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("input").unwrap());
static SELECT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("select").unwrap());
static OPTION: LazyLock<Selector> = LazyLock::new(|| Selector::parse("option").unwrap());

/// First element matching `sel` whose `name` attribute equals `name`.
fn find_named<'a>(document: &'a Html, sel: &Selector, name: &str) -> Option<ElementRef<'a>> {
    document
        .select(sel)
        .find(|el| el.value().attr("name") == Some(name))
}

/// Read the `value` attribute of the first `<input name="{field}">`.
///
/// Returns `NotFound` if there is no such input, or if it has no `value`
/// attribute. An empty `value` is returned as an empty string.
pub fn extract_hidden_value(html: &str, field: &str) -> Result<String, ExtractError> {
    let document = Html::parse_document(html);
    let input = find_named(&document, &INPUT, field)
        .ok_or_else(|| ExtractError::not_found(format!("input[name={field:?}]")))?;

    input
        .value()
        .attr("value")
        .map(str::to_string)
        .ok_or_else(|| ExtractError::not_found(format!("value of input[name={field:?}]")))
}

/// Read every `(value, text)` pair of the options inside the first
/// `<select name="{control}">`, in document order.
///
/// Option text has surrounding whitespace trimmed. An option without a
/// `value` attribute yields an empty value. A select with no options is
/// an empty list, not an error.
pub fn extract_options(html: &str, control: &str) -> Result<Vec<(String, String)>, ExtractError> {
    let document = Html::parse_document(html);
    let select = find_named(&document, &SELECT, control)
        .ok_or_else(|| ExtractError::not_found(format!("select[name={control:?}]")))?;

    Ok(select
        .select(&OPTION)
        .map(|option| {
            let value = option.value().attr("value").unwrap_or_default().to_string();
            let text = option.text().collect::<String>().trim().to_string();
            (value, text)
        })
        .collect())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A select with N options yields exactly N pairs, in order
        #[test]
        fn option_count_and_order(
            entries in proptest::collection::vec(
                ("[a-z]{3}[0-9]", "[A-Za-z][A-Za-z ]{0,15}[A-Za-z]"),
                0..40,
            )
        ) {
            let options: String = entries
                .iter()
                .map(|(value, label)| format!("<option value=\"{value}\">{label}</option>\n"))
                .collect();
            let html = format!(
                "<html><body><select name=\"station0\">\n{options}</select></body></html>"
            );

            let extracted = extract_options(&html, "station0").unwrap();
            prop_assert_eq!(extracted.len(), entries.len());
            for ((value, label), (got_value, got_label)) in entries.iter().zip(&extracted) {
                prop_assert_eq!(value, got_value);
                prop_assert_eq!(label, got_label);
            }
        }
    }
}
