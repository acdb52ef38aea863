use stack_greeter::adapters::CloudFormationStackLauncher;
use stack_greeter::configuration::Configuration;
use stack_greeter::core::{bootstrap, StackRequest};
use stack_greeter::observability::init_tracing;
use stack_greeter::{environment, greeter};
use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let configuration = Configuration::load();

    let config = environment::load()
        .await
        .unwrap_or_else(|e| panic!("configuration error, {}", e));
    let cloudformation_client = aws_sdk_cloudformation::Client::new(&config);
    let launcher = CloudFormationStackLauncher::new(cloudformation_client);

    bootstrap(&launcher, &StackRequest::from(&configuration)).await;

    greeter::greet(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
