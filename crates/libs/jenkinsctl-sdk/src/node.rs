//! Node (worker machine) status.

use serde::{Deserialize, Serialize};

use crate::connection::Jenkins;
use crate::prelude::*;

/// Node status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Online,
    Offline,
}

/// One worker machine registered with the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub display_name: String,
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub temporarily_offline: bool,
    #[serde(default)]
    pub idle: bool,
    #[serde(default)]
    pub offline_cause_reason: String,
}

impl Node {
    /// Offline for any reason, including a temporary hold.
    pub fn is_offline(&self) -> bool {
        self.offline || self.temporarily_offline
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComputerList {
    #[serde(default)]
    pub computer: Vec<Node>,
}

impl Jenkins {
    /// Nodes matching the requested status.
    pub async fn nodes(&self, status: NodeStatus) -> Result<Vec<Node>> {
        let list: ComputerList = self.get_json("computer/api/json", "node list").await?;
        Ok(list
            .computer
            .into_iter()
            .filter(|node| match status {
                NodeStatus::Online => !node.is_offline(),
                NodeStatus::Offline => node.is_offline(),
            })
            .collect())
    }
}
