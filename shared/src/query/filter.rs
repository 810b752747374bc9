//! Field constraints and the order-preserving `filter` over records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Record;

/// How a constraint value is compared with a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// Exact string equality, used for enumerated (select) fields.
    Exact,
    /// Case-insensitive substring containment, used for free-text fields.
    Contains,
}

/// A single per-field constraint. An empty value constrains nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub rule: MatchRule,
    pub value: String,
}

impl Constraint {
    pub fn exact(value: impl Into<String>) -> Self {
        Self {
            rule: MatchRule::Exact,
            value: value.into(),
        }
    }

    pub fn contains(value: impl Into<String>) -> Self {
        Self {
            rule: MatchRule::Contains,
            value: value.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.value.is_empty()
    }

    /// Whether `candidate` satisfies this constraint. Inactive constraints
    /// accept everything.
    pub fn matches(&self, candidate: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        match self.rule {
            MatchRule::Exact => candidate == self.value,
            MatchRule::Contains => candidate
                .to_lowercase()
                .contains(&self.value.to_lowercase()),
        }
    }
}

/// Declarative set of per-field constraints, keyed by record field name.
///
/// Active constraints combine with logical AND. A key that names no
/// declared field of the record type being filtered is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    constraints: BTreeMap<String, Constraint>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exact(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(field, Constraint::exact(value))
    }

    pub fn contains(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(field, Constraint::contains(value))
    }

    pub fn with(mut self, field: impl Into<String>, constraint: Constraint) -> Self {
        self.insert(field, constraint);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, constraint: Constraint) {
        self.constraints.insert(field.into(), constraint);
    }

    pub fn get(&self, field: &str) -> Option<&Constraint> {
        self.constraints.get(field)
    }

    /// Constraints with a non-empty value.
    pub fn active(&self) -> impl Iterator<Item = (&str, &Constraint)> {
        self.constraints
            .iter()
            .filter(|(_, constraint)| constraint.is_active())
            .map(|(field, constraint)| (field.as_str(), constraint))
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active().next().is_none()
    }

    /// Whether `record` satisfies every active constraint on a declared
    /// field. A row missing a declared field cannot satisfy a constraint
    /// on it.
    pub fn accepts<R: Record>(&self, record: &R) -> bool {
        self.active()
            .filter(|(field, _)| R::declares(field))
            .all(|(field, constraint)| {
                record
                    .field(field)
                    .map_or(false, |value| constraint.matches(&value))
            })
    }
}

/// Keeps the records accepted by `spec`, preserving input order.
pub fn filter<'a, R: Record>(records: &'a [R], spec: &FilterSpec) -> Vec<&'a R> {
    records.iter().filter(|record| spec.accepts(*record)).collect()
}

/// The kind of control a filter bar renders for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterInput {
    Select { options: &'static [&'static str] },
    Text { placeholder: &'static str },
}

impl FilterInput {
    pub fn rule(&self) -> MatchRule {
        match self {
            FilterInput::Select { .. } => MatchRule::Exact,
            FilterInput::Text { .. } => MatchRule::Contains,
        }
    }
}

/// One control of a page's filter bar, bound to a record field.
///
/// `key` identifies the control in [`FilterValues`]; `field` is the record
/// field it constrains. They differ for free-text search boxes such as the
/// users page's `searchTerm`, which searches `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    pub key: &'static str,
    pub label: &'static str,
    pub field: &'static str,
    pub input: FilterInput,
}

impl FilterField {
    pub fn constraint(&self, value: &str) -> Constraint {
        Constraint {
            rule: self.input.rule(),
            value: value.to_string(),
        }
    }
}

/// Raw control values as typed or selected in a filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValues(BTreeMap<String, String>);

impl FilterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a control value. An empty value clears the control.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, value);
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Current value of a control, empty when unset.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of controls currently holding a value.
    pub fn active_count(&self) -> usize {
        self.0.len()
    }

    /// Builds the constraint set for `fields`. Values whose key matches no
    /// control are ignored.
    pub fn to_spec(&self, fields: &[FilterField]) -> FilterSpec {
        fields
            .iter()
            .filter_map(|field| {
                self.0
                    .get(field.key)
                    .map(|value| (field.field, field.constraint(value)))
            })
            .fold(FilterSpec::new(), |spec, (field, constraint)| {
                spec.with(field, constraint)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use std::borrow::Cow;

    struct Row {
        id: &'static str,
        name: &'static str,
        status: Option<&'static str>,
    }

    impl Record for Row {
        const FIELDS: &'static [&'static str] = &["id", "name", "status"];

        fn id(&self) -> &str {
            self.id
        }

        fn field(&self, name: &str) -> Option<Cow<'_, str>> {
            match name {
                "id" => Some(Cow::Borrowed(self.id)),
                "name" => Some(Cow::Borrowed(self.name)),
                "status" => self.status.map(Cow::Borrowed),
                _ => None,
            }
        }
    }

    #[fixture]
    fn rows() -> Vec<Row> {
        vec![
            Row { id: "R1", name: "Ada Lovelace", status: Some("active") },
            Row { id: "R2", name: "Grace Hopper", status: Some("inactive") },
            Row { id: "R3", name: "Alan Turing", status: Some("active") },
            Row { id: "R4", name: "Barbara Liskov", status: None },
        ]
    }

    fn ids<R: Record>(records: &[R]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    #[rstest]
    fn test_empty_spec_is_identity(rows: Vec<Row>) {
        let result = filter(&rows, &FilterSpec::new());
        assert_eq!(ids(&result), vec!["R1", "R2", "R3", "R4"]);
    }

    #[rstest]
    fn test_exact_match_is_case_sensitive(rows: Vec<Row>) {
        let result = filter(&rows, &FilterSpec::new().exact("status", "active"));
        assert_eq!(ids(&result), vec!["R1", "R3"]);

        let result = filter(&rows, &FilterSpec::new().exact("status", "Active"));
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_contains_is_case_insensitive(rows: Vec<Row>) {
        let result = filter(&rows, &FilterSpec::new().contains("name", "LA"));
        assert_eq!(ids(&result), vec!["R1", "R3"]);
    }

    #[rstest]
    fn test_constraints_combine_with_and(rows: Vec<Row>) {
        let spec = FilterSpec::new()
            .contains("name", "a")
            .exact("status", "inactive");
        let result = filter(&rows, &spec);
        assert_eq!(ids(&result), vec!["R2"]);
    }

    #[rstest]
    fn test_empty_value_imposes_no_constraint(rows: Vec<Row>) {
        let spec = FilterSpec::new().exact("status", "");
        assert!(spec.is_unconstrained());
        assert_eq!(filter(&rows, &spec).len(), 4);
    }

    #[rstest]
    fn test_unknown_field_is_ignored(rows: Vec<Row>) {
        let spec = FilterSpec::new().exact("colour", "blue");
        assert_eq!(filter(&rows, &spec).len(), 4);
    }

    #[rstest]
    fn test_missing_field_does_not_satisfy_constraint(rows: Vec<Row>) {
        let spec = FilterSpec::new().contains("status", "a");
        let result = filter(&rows, &spec);
        assert!(!ids(&result).contains(&"R4".to_string()));
    }

    #[test]
    fn test_filter_values_build_spec_through_controls() {
        const FIELDS: &[FilterField] = &[
            FilterField {
                key: "searchTerm",
                label: "Search Name",
                field: "name",
                input: FilterInput::Text { placeholder: "Filter by name..." },
            },
            FilterField {
                key: "status",
                label: "Status",
                field: "status",
                input: FilterInput::Select { options: &["active", "inactive"] },
            },
        ];

        let values = FilterValues::new()
            .with("searchTerm", "sa")
            .with("status", "active")
            .with("bogus", "ignored");
        let spec = values.to_spec(FIELDS);

        assert_eq!(spec.get("name"), Some(&Constraint::contains("sa")));
        assert_eq!(spec.get("status"), Some(&Constraint::exact("active")));
        assert_eq!(spec.get("bogus"), None);
        assert_eq!(spec.active().count(), 2);
    }

    #[test]
    fn test_filter_values_empty_value_clears_control() {
        let mut values = FilterValues::new().with("status", "active");
        assert_eq!(values.get("status"), "active");
        values.set("status", "");
        assert_eq!(values.get("status"), "");
        assert!(values.is_empty());
    }
}
