use std::fmt;
use std::fmt::{Display, Formatter};

use log::{debug, error, info};

use crate::ec2_instance_client::{Describe, MachineInstance};
use crate::error::ReporterError;

/// One reported instance, rendered as `InstanceID: <id> State: <state>`.
#[derive(Debug, PartialEq)]
pub struct StatusLine<'a> {
    pub instance_id: &'a str,
    pub state: &'a str,
}

impl<'a> From<&'a MachineInstance> for StatusLine<'a> {
    fn from(instance: &'a MachineInstance) -> Self {
        StatusLine {
            instance_id: &instance.instance_id,
            state: &instance.state,
        }
    }
}

impl Display for StatusLine<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "InstanceID: {} State: {}", self.instance_id, self.state)
    }
}

/// Turns requested instance ids into status lines using the injected inventory.
///
/// The inventory handle is built once at startup and shared read-only across
/// invocations; the reporter itself keeps no state between calls.
pub struct InstanceStatusReporter<D> {
    inventory: D,
}

impl<D: Describe> InstanceStatusReporter<D> {
    pub fn new(inventory: D) -> Self {
        InstanceStatusReporter { inventory }
    }

    pub async fn report(&self, instance_ids: &[String]) -> Result<Vec<String>, ReporterError> {
        // An empty InstanceIds filter asks EC2 for every instance.
        if instance_ids.is_empty() {
            debug!("No instance ids requested");
            return Ok(vec![]);
        }

        let instances = self
            .inventory
            .describe_instances(instance_ids)
            .await
            .map_err(|e| {
                error!("Failed to describe instances {:?}: {}", instance_ids, e);
                e
            })?;

        let status: Vec<String> = instances
            .iter()
            .map(|instance| StatusLine::from(instance).to_string())
            .collect();
        info!(
            "Reported {} status lines for {} requested instances",
            status.len(),
            instance_ids.len()
        );
        Ok(status)
    }
}
