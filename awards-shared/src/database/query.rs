use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use aws_sdk_dynamodb::types::AttributeValue;

use crate::models::errors::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    AtLeast,
}

impl Comparison {
    fn operator(&self) -> &'static str {
        match self {
            Comparison::Equal => "=",
            Comparison::AtLeast => ">=",
        }
    }
}

/// One `attribute <op> :placeholder` clause together with the value bound to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    attribute: String,
    comparison: Comparison,
    placeholder: String,
    value: AttributeValue,
}

impl Condition {
    fn new(attribute: &str, comparison: Comparison, placeholder: &str, value: AttributeValue) -> Self {
        Self {
            attribute: attribute.to_string(),
            comparison,
            placeholder: format!(":{}", placeholder),
            value,
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    pub fn expression(&self) -> String {
        format!("{} {} {}", self.attribute, self.comparison.operator(), self.placeholder)
    }

    /// Evaluates the clause against a stored item. A missing attribute never matches.
    pub fn matches(&self, item: &HashMap<String, AttributeValue>) -> bool {
        let Some(actual) = item.get(&self.attribute) else {
            return false;
        };

        match (compare(actual, &self.value), self.comparison) {
            (Some(Ordering::Equal), Comparison::Equal) => true,
            (Some(Ordering::Equal | Ordering::Greater), Comparison::AtLeast) => true,
            (None, Comparison::Equal) => actual == &self.value,
            _ => false,
        }
    }
}

fn compare(left: &AttributeValue, right: &AttributeValue) -> Option<Ordering> {
    match (left, right) {
        (AttributeValue::N(l), AttributeValue::N(r)) => {
            let l = l.parse::<f64>().ok()?;
            let r = r.parse::<f64>().ok()?;
            l.partial_cmp(&r)
        }
        (AttributeValue::S(l), AttributeValue::S(r)) => Some(l.cmp(r)),
        _ => None,
    }
}

/// A fully bound range query: key conditions plus an optional post-match filter.
#[derive(Debug, Clone, PartialEq)]
pub struct AwardQuery {
    table_name: String,
    key_conditions: Vec<Condition>,
    filter: Option<Condition>,
}

impl AwardQuery {
    pub fn builder(table_name: impl Into<String>) -> AwardQueryBuilder {
        AwardQueryBuilder {
            table_name: table_name.into(),
            key_conditions: Vec::new(),
            filter: None,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn key_conditions(&self) -> &[Condition] {
        &self.key_conditions
    }

    pub fn filter(&self) -> Option<&Condition> {
        self.filter.as_ref()
    }

    pub fn key_condition_expression(&self) -> String {
        self.key_conditions
            .iter()
            .map(Condition::expression)
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    pub fn filter_expression(&self) -> Option<String> {
        self.filter.as_ref().map(Condition::expression)
    }

    pub fn expression_attribute_values(&self) -> HashMap<String, AttributeValue> {
        self.key_conditions
            .iter()
            .chain(self.filter.iter())
            .map(|c| (c.placeholder.clone(), c.value.clone()))
            .collect()
    }

    /// Key conditions first, then the filter, the order the store applies them in.
    pub fn matches(&self, item: &HashMap<String, AttributeValue>) -> bool {
        self.key_conditions.iter().all(|c| c.matches(item))
            && self.filter.as_ref().map_or(true, |f| f.matches(item))
    }
}

pub struct AwardQueryBuilder {
    table_name: String,
    key_conditions: Vec<Condition>,
    filter: Option<Condition>,
}

impl AwardQueryBuilder {
    pub fn key_equals(mut self, attribute: &str, value: AttributeValue) -> Self {
        self.key_conditions
            .push(Condition::new(attribute, Comparison::Equal, attribute, value));
        self
    }

    pub fn filter_at_least(mut self, attribute: &str, placeholder: &str, value: AttributeValue) -> Self {
        self.filter = Some(Condition::new(attribute, Comparison::AtLeast, placeholder, value));
        self
    }

    pub fn build(self) -> Result<AwardQuery, StoreError> {
        if self.table_name.trim().is_empty() {
            return Err(StoreError::InvalidQuery("table name is empty".to_string()));
        }
        if self.key_conditions.is_empty() {
            return Err(StoreError::InvalidQuery("at least one key condition is required".to_string()));
        }

        let mut placeholders = HashSet::new();
        for condition in self.key_conditions.iter().chain(self.filter.iter()) {
            if !placeholders.insert(condition.placeholder.as_str()) {
                return Err(StoreError::InvalidQuery(format!(
                    "placeholder {} is bound twice",
                    condition.placeholder
                )));
            }
        }

        Ok(AwardQuery {
            table_name: self.table_name,
            key_conditions: self.key_conditions,
            filter: self.filter,
        })
    }
}
