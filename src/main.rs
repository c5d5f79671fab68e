use breakdown_lambda::config::Config;
use breakdown_lambda::handler::function_handler;
use breakdown_lambda::http::HTTP_CLIENT;
use breakdown_lambda::models::ProxyEvent;
use lambda_runtime::{Error, LambdaEvent, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    let config = Config::from_env();
    let config = &config;
    let client = &*HTTP_CLIENT;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ProxyEvent>| async move {
        function_handler(event, config, client).await
    }))
    .await
}
