use async_trait::async_trait;

use crate::database::award_store::{AwardStore, Item, QueryOutput};
use crate::database::query::AwardQuery;
use crate::models::errors::StoreError;

/// Store held entirely in memory, used by tests and local runs.
///
/// Items are matched in insertion order, so results come back in the order
/// they were added. An optional failure makes every query fail with it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAwardStore {
    table_name: String,
    items: Vec<Item>,
    failure: Option<StoreError>,
}

impl InMemoryAwardStore {
    pub fn new(table_name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            table_name: table_name.into(),
            items,
            failure: None,
        }
    }

    pub fn failing(table_name: impl Into<String>, failure: StoreError) -> Self {
        Self {
            table_name: table_name.into(),
            items: Vec::new(),
            failure: Some(failure),
        }
    }
}

#[async_trait]
impl AwardStore for InMemoryAwardStore {
    async fn query(&self, query: &AwardQuery) -> Result<QueryOutput, StoreError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        if query.table_name() != self.table_name {
            return Err(StoreError::TableNotFound(format!(
                "Requested resource not found: {}",
                query.table_name()
            )));
        }

        let items = self
            .items
            .iter()
            .filter(|item| query.matches(item))
            .cloned()
            .collect();

        Ok(QueryOutput { items, last_evaluated_key: None })
    }
}
