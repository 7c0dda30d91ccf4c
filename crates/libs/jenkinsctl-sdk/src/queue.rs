//! Build queue inspection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::connection::Jenkins;
use crate::prelude::*;
use crate::status::BuildStatus;

/// Snapshot of the server's build queue.
#[derive(Debug, Default, Deserialize)]
pub struct BuildQueue {
    #[serde(default)]
    pub items: Vec<QueueItem>,
}

/// One queued task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueItem {
    pub id: u64,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub stuck: bool,
    /// Server-provided explanation for why the item is waiting.
    #[serde(default)]
    pub why: Option<String>,
    pub task: QueueTask,
}

/// The job a queue item will run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueTask {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl BuildQueue {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl QueueItem {
    /// Health of the queued task.
    pub fn status(&self) -> BuildStatus {
        BuildStatus::from_color(self.task.color.as_deref().unwrap_or_default())
    }
}

impl Jenkins {
    /// The current build queue.
    pub async fn build_queue(&self) -> Result<BuildQueue> {
        self.get_json("queue/api/json", "build queue").await
    }
}

impl fmt::Display for QueueItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.task.name)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Status: {}", self.status())?;
        writeln!(f, "Pending: {}", self.pending)?;
        writeln!(f, "Stuck: {}", self.stuck)?;
        if let Some(why) = self.why.as_deref() {
            writeln!(f, "Why: {why}")?;
        }
        write!(f, "URL: {}", self.task.url)
    }
}
