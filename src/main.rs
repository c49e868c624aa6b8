mod config;
mod ec2_instance_client;
mod error;
mod handler;
mod reporter;

use std::sync::Arc;

use lambda_runtime::{handler_fn, Context, Error};
use log::info;

use crate::config::Settings;
use crate::ec2_instance_client::Ec2InstanceClient;
use crate::handler::{report_handler, InvocationRequest};
use crate::reporter::InstanceStatusReporter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Configuration errors end the process before the handler is registered.
    let settings = Settings::from_env()?;
    simple_logger::init_with_level(settings.log_level).map_err(error::StartupError::from)?;
    info!("Starting ec2-status-reporter in {}", settings.region.name());

    let reporter = Arc::new(InstanceStatusReporter::new(Ec2InstanceClient::new(
        settings.region,
    )));

    lambda_runtime::run(handler_fn(
        move |event: InvocationRequest, context: Context| {
            report_handler(Arc::clone(&reporter), event, context)
        },
    ))
    .await?;
    Ok(())
}
