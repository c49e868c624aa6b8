use std::sync::Arc;

use lambda_runtime::Context;
use log::info;
use serde::Deserialize;

use crate::ec2_instance_client::Describe;
use crate::error::ReporterError;
use crate::reporter::InstanceStatusReporter;

#[derive(Debug, Deserialize, PartialEq)]
pub struct InvocationRequest {
    #[serde(rename = "InstanceID", default)]
    pub instance_ids: Vec<String>,
}

pub async fn report_handler<D: Describe>(
    reporter: Arc<InstanceStatusReporter<D>>,
    event: InvocationRequest,
    context: Context,
) -> Result<Vec<String>, ReporterError> {
    info!(
        "Invocation {} requested {} instances",
        context.request_id,
        event.instance_ids.len()
    );
    reporter.report(&event.instance_ids).await
}
