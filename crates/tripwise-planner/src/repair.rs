//! Text repairs for quasi-JSON model output
//!
//! Each rule is a pure `&str -> String` transformation. [`REPAIR_SEQUENCE`]
//! fixes the order they run in; [`repair`] applies the whole sequence.
//!
//! The rules are naive on purpose: they do not know about string escaping,
//! so an apostrophe or a `hh:mm` time inside a value can be mangled. They only
//! run after strict parsing has already failed.

use regex::Regex;
use std::sync::LazyLock;

static RE_KEY_BEFORE_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+):\s*""#).unwrap());

static RE_KEY_BEFORE_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+):\s*\[").unwrap());

static RE_KEY_BEFORE_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+):\s*\{").unwrap());

static RE_KEY_BEFORE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+):\s*(\d+)").unwrap());

/// A single normalization step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepairRule {
    /// `'x'` becomes `"x"`
    SingleToDoubleQuotes,

    /// `key: "v"` becomes `"key": "v"`
    QuoteKeyBeforeString,

    /// `key: [` becomes `"key": [`
    QuoteKeyBeforeArray,

    /// `key: {` becomes `"key": {`
    QuoteKeyBeforeObject,

    /// `key: 42` becomes `"key": 42`
    QuoteKeyBeforeNumber,
}

/// Order in which [`repair`] applies the rules
pub const REPAIR_SEQUENCE: [RepairRule; 5] = [
    RepairRule::SingleToDoubleQuotes,
    RepairRule::QuoteKeyBeforeString,
    RepairRule::QuoteKeyBeforeArray,
    RepairRule::QuoteKeyBeforeObject,
    RepairRule::QuoteKeyBeforeNumber,
];

impl RepairRule {
    /// Apply this rule to `text`
    pub fn apply(&self, text: &str) -> String {
        match self {
            RepairRule::SingleToDoubleQuotes => text.replace('\'', "\""),
            RepairRule::QuoteKeyBeforeString => RE_KEY_BEFORE_STRING
                .replace_all(text, r#""${1}": ""#)
                .into_owned(),
            RepairRule::QuoteKeyBeforeArray => RE_KEY_BEFORE_ARRAY
                .replace_all(text, r#""${1}": ["#)
                .into_owned(),
            RepairRule::QuoteKeyBeforeObject => RE_KEY_BEFORE_OBJECT
                .replace_all(text, r#""${1}": {"#)
                .into_owned(),
            RepairRule::QuoteKeyBeforeNumber => RE_KEY_BEFORE_NUMBER
                .replace_all(text, r#""${1}": ${2}"#)
                .into_owned(),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            RepairRule::SingleToDoubleQuotes => "single_to_double_quotes",
            RepairRule::QuoteKeyBeforeString => "quote_key_before_string",
            RepairRule::QuoteKeyBeforeArray => "quote_key_before_array",
            RepairRule::QuoteKeyBeforeObject => "quote_key_before_object",
            RepairRule::QuoteKeyBeforeNumber => "quote_key_before_number",
        }
    }
}

/// Run every rule in [`REPAIR_SEQUENCE`] order
pub fn repair(candidate: &str) -> String {
    REPAIR_SEQUENCE
        .iter()
        .fold(candidate.to_string(), |text, rule| rule.apply(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quotes() {
        assert_eq!(
            RepairRule::SingleToDoubleQuotes.apply("{'mode': 'Bus'}"),
            r#"{"mode": "Bus"}"#
        );
    }

    #[test]
    fn test_key_before_string() {
        let rule = RepairRule::QuoteKeyBeforeString;
        assert_eq!(rule.apply(r#"{mode: "Bus"}"#), r#"{"mode": "Bus"}"#);
        assert_eq!(rule.apply(r#"{mode:"Bus"}"#), r#"{"mode": "Bus"}"#);
        assert_eq!(rule.apply("{mode:\n  \"Bus\"}"), r#"{"mode": "Bus"}"#);
    }

    #[test]
    fn test_key_before_array() {
        assert_eq!(
            RepairRule::QuoteKeyBeforeArray.apply(r#"{route_highlights: ["Fort"]}"#),
            r#"{"route_highlights": ["Fort"]}"#
        );
    }

    #[test]
    fn test_key_before_object() {
        assert_eq!(
            RepairRule::QuoteKeyBeforeObject.apply(r#"{meta: {"a": 1}}"#),
            r#"{"meta": {"a": 1}}"#
        );
    }

    #[test]
    fn test_key_before_number() {
        let rule = RepairRule::QuoteKeyBeforeNumber;
        assert_eq!(rule.apply("{distance_km: 300}"), r#"{"distance_km": 300}"#);
        assert_eq!(rule.apply("{hours:2.5}"), r#"{"hours": 2.5}"#);
    }

    #[test]
    fn test_quoted_keys_are_untouched() {
        let valid = r#"{"source": "Delhi", "distance_km": 300, "list": [1], "obj": {"k": "v"}}"#;
        for rule in REPAIR_SEQUENCE {
            assert_eq!(rule.apply(valid), valid, "{} changed valid JSON", rule.name());
        }
    }

    #[test]
    fn test_rules_only_touch_their_own_shape() {
        // The number rule leaves string-valued keys alone and vice versa
        assert_eq!(
            RepairRule::QuoteKeyBeforeNumber.apply(r#"{mode: "Bus"}"#),
            r#"{mode: "Bus"}"#
        );
        assert_eq!(
            RepairRule::QuoteKeyBeforeString.apply("{distance_km: 300}"),
            "{distance_km: 300}"
        );
    }

    #[test]
    fn test_full_sequence_on_dict_literal() {
        assert_eq!(
            repair("{source: 'Delhi', distance_km: 300}"),
            r#"{"source": "Delhi", "distance_km": 300}"#
        );
    }

    #[test]
    fn test_full_sequence_on_nested_literal() {
        let repaired = repair(
            "{travel_options: [{mode: 'Train', travel_time_hours: 5}], route_highlights: ['Agra Fort']}",
        );
        assert_eq!(
            repaired,
            r#"{"travel_options": [{"mode": "Train", "travel_time_hours": 5}], "route_highlights": ["Agra Fort"]}"#
        );
    }

    #[test]
    fn test_apostrophes_are_mangled() {
        // No escaping awareness: an apostrophe becomes a stray quote
        assert_eq!(repair(r#"{"notes": "Devil's Point"}"#), r#"{"notes": "Devil"s Point"}"#);
    }

    #[test]
    fn test_sequence_order() {
        assert_eq!(REPAIR_SEQUENCE[0], RepairRule::SingleToDoubleQuotes);
        assert_eq!(REPAIR_SEQUENCE[4], RepairRule::QuoteKeyBeforeNumber);
    }
}
