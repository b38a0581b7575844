use aws_config::meta::region::RegionProviderChain;
use aws_config::Region;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use crate::utilities::config::AwardConfig;

/// Builds the client once per cold start; invocations share it.
pub async fn get_dynamodb_client(config: &AwardConfig) -> DynamoDbClient {
    let region_provider = RegionProviderChain::first_try(config.region.clone().map(Region::new))
        .or_default_provider();
    let shared_config = aws_config::from_env().region(region_provider).load().await;

    let mut builder = aws_sdk_dynamodb::config::Builder::from(&shared_config);
    if let Some(endpoint) = &config.endpoint_url {
        log::info!("Using DynamoDB endpoint override: {}", endpoint);
        builder = builder.endpoint_url(endpoint);
    }

    DynamoDbClient::from_conf(builder.build())
}
