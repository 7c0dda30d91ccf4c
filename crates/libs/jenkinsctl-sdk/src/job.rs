//! Job operations: listing, configuration, builds, creation, deletion.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::connection::Jenkins;
use crate::prelude::*;
use crate::status::BuildStatus;

/// Job summary from the server index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    #[serde(default)]
    pub url: String,
    /// Health "color" code; mapped to a label with
    /// [`BuildStatus::from_color`].
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Job {
    /// Health of the job's latest build.
    pub fn status(&self) -> BuildStatus {
        BuildStatus::from_color(self.color.as_deref().unwrap_or_default())
    }
}

/// Reference to one build of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRef {
    pub number: u32,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobList {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JobDetails {
    #[serde(default)]
    pub last_build: Option<BuildRef>,
    #[serde(default)]
    pub last_successful_build: Option<BuildRef>,
}

impl Jenkins {
    /// All jobs known to the server.
    pub async fn jobs(&self) -> Result<Vec<Job>> {
        let list: JobList = self.get_json("api/json", "server").await?;
        Ok(list.jobs)
    }

    /// The job's configuration XML.
    pub async fn job_config(&self, name: &str) -> Result<String> {
        self.get_text(&format!("job/{name}/config.xml"), &format!("job {name}"))
            .await
    }

    /// The job's most recent build, if any.
    pub async fn last_build(&self, name: &str) -> Result<Option<BuildRef>> {
        let details: JobDetails = self
            .get_json(&format!("job/{name}/api/json"), &format!("job {name}"))
            .await?;
        Ok(details.last_build)
    }

    /// The job's most recent successful build, if any.
    pub async fn last_successful_build(&self, name: &str) -> Result<Option<BuildRef>> {
        let details: JobDetails = self
            .get_json(&format!("job/{name}/api/json"), &format!("job {name}"))
            .await?;
        Ok(details.last_successful_build)
    }

    /// Creates a job from a local configuration XML file.
    ///
    /// The file is read before anything is sent; an unreadable file
    /// aborts with no request made.
    pub async fn create_job(&self, xml_file: &Path, name: &str) -> Result<()> {
        let job_data = tokio::fs::read_to_string(xml_file).await?;
        self.post(
            &format!("createItem?name={name}"),
            "text/xml",
            job_data,
            &format!("job {name}"),
        )
        .await?;
        info!("created job {name}");
        Ok(())
    }

    /// Deletes the named job.
    pub async fn delete_job(&self, name: &str) -> Result<()> {
        self.post_empty(&format!("job/{name}/doDelete"), &format!("job {name}"))
            .await?;
        info!("deleted job {name}");
        Ok(())
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Status: {}", self.status())?;
        if let Some(description) = self.description.as_deref()
            && !description.is_empty()
        {
            writeln!(f, "{description}")?;
        }
        write!(f, "{}", self.url)
    }
}
