use lambda_http::{service_fn, Error, Request};
use awards_lambda::router::handle_lambda;
use awards_lambda::state::AppState;
use awards_shared::database::award_store::DynamoAwardStore;
use awards_shared::database::client::get_dynamodb_client;
use awards_shared::utilities::config::{self, AwardConfig};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    let award_config = AwardConfig::from_env()?;
    log::info!("Serving awards from table {}", award_config.table_name);

    let client = get_dynamodb_client(&award_config).await;
    let state = AppState::new(award_config.table_name, DynamoAwardStore::new(client));

    lambda_http::run(service_fn(|event: Request| handle_lambda(event, &state))).await?;
    Ok(())
}
