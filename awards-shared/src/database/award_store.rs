use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{info, warn};

use crate::database::errors::map_query_error;
use crate::database::query::AwardQuery;
use crate::models::errors::StoreError;

pub type Item = HashMap<String, AttributeValue>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutput {
    pub items: Vec<Item>,
    pub last_evaluated_key: Option<Item>,
}

/// Interface
#[async_trait]
pub trait AwardStore: Send + Sync {
    /// Runs a single query page. Continuation keys are reported, never followed.
    async fn query(&self, query: &AwardQuery) -> Result<QueryOutput, StoreError>;
}

/// DynamoDB-backed implementation
pub struct DynamoAwardStore {
    db: DynamoDbClient,
}

impl DynamoAwardStore {
    pub fn new(db: DynamoDbClient) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AwardStore for DynamoAwardStore {
    async fn query(&self, query: &AwardQuery) -> Result<QueryOutput, StoreError> {
        let key_condition = query.key_condition_expression();
        let filter = query.filter_expression();
        info!(table = %query.table_name(), %key_condition, ?filter, "Querying awards");

        let result = self
            .db
            .query()
            .table_name(query.table_name())
            .key_condition_expression(key_condition)
            .set_filter_expression(filter)
            .set_expression_attribute_values(Some(query.expression_attribute_values()))
            .send()
            .await
            .map_err(map_query_error)?;

        if let Some(key) = result.last_evaluated_key() {
            warn!(?key, "Query returned a continuation key; only the first page is used");
        }

        Ok(QueryOutput {
            items: result.items.unwrap_or_default(),
            last_evaluated_key: result.last_evaluated_key,
        })
    }
}
