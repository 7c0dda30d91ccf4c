//! Build artifact download.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::connection::Jenkins;
use crate::prelude::*;

/// One artifact advertised by a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub file_name: String,
    pub relative_path: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BuildInfo {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl Jenkins {
    /// Downloads every artifact of one build into `dest`.
    ///
    /// The destination directory is created if missing; artifacts are
    /// saved flat by file name. Returns the paths written.
    pub async fn download_artifacts(
        &self,
        job: &str,
        build: u32,
        dest: &Path,
    ) -> Result<Vec<PathBuf>> {
        let what = format!("build {build} of job {job}");
        let info: BuildInfo = self
            .get_json(&format!("job/{job}/{build}/api/json"), &what)
            .await?;

        tokio::fs::create_dir_all(dest).await?;

        let mut saved = Vec::with_capacity(info.artifacts.len());
        for artifact in &info.artifacts {
            let response = self
                .get(
                    &format!("job/{job}/{build}/artifact/{}", artifact.relative_path),
                    &format!("artifact {}", artifact.relative_path),
                )
                .await?;
            let bytes = response
                .bytes()
                .await
                .map_err(jenkinsctl_requests::error::Error::from)?;

            let target = dest.join(&artifact.file_name);
            tokio::fs::write(&target, &bytes).await?;
            info!("saved {}", target.display());
            saved.push(target);
        }
        Ok(saved)
    }
}
