use async_trait::async_trait;
use log::debug;
use rusoto_core::Region;
use rusoto_ec2::{DescribeInstancesRequest, Ec2, Ec2Client};

use crate::error::ReporterError;

const UNKNOWN_STATE: &str = "unknown";

pub struct Ec2InstanceClient {
    client: Ec2Client,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MachineInstance {
    pub instance_id: String,
    pub state: String,
}

#[async_trait]
pub trait Describe {
    async fn describe_instances(
        &self,
        instance_ids: &[String],
    ) -> Result<Vec<MachineInstance>, ReporterError>;
}

#[async_trait]
impl Describe for Ec2InstanceClient {
    async fn describe_instances(
        &self,
        instance_ids: &[String],
    ) -> Result<Vec<MachineInstance>, ReporterError> {
        let request = DescribeInstancesRequest {
            instance_ids: Some(instance_ids.to_vec()),
            ..DescribeInstancesRequest::default()
        };

        let result = self
            .client
            .describe_instances(request)
            .await
            .map_err(ReporterError::DescribeInstancesError)?;

        let mut machine_instances = Vec::<MachineInstance>::new();
        for reservation in result.reservations.unwrap_or_default() {
            for instance in reservation.instances.unwrap_or_default() {
                let state = instance
                    .state
                    .and_then(|state| state.name)
                    .unwrap_or_else(|| UNKNOWN_STATE.to_string());
                machine_instances.push(MachineInstance {
                    instance_id: instance.instance_id.ok_or(ReporterError::NoneValue)?,
                    state,
                })
            }
        }
        debug!(
            "DescribeInstances returned {} of {} requested instances",
            machine_instances.len(),
            instance_ids.len()
        );
        Ok(machine_instances)
    }
}

impl Ec2InstanceClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(Ec2Client::new(region))
    }

    pub fn new_with_client(client: Ec2Client) -> Self {
        Ec2InstanceClient { client }
    }
}
