//! View listing and creation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::connection::Jenkins;
use crate::prelude::*;

/// A named grouping of jobs on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Closed set of view types the server can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    ListView,
    NestedView,
    MyView,
    DashboardView,
    PipelineView,
}

impl ViewType {
    /// Accepted spellings, in help-display order.
    pub const fn variants() -> &'static [&'static str] {
        &[
            "LIST_VIEW",
            "NESTED_VIEW",
            "MY_VIEW",
            "DASHBOARD_VIEW",
            "PIPELINE_VIEW",
        ]
    }

    /// Parses a command-line spelling; `None` for anything outside the
    /// closed set.
    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "LIST_VIEW" => Some(ViewType::ListView),
            "NESTED_VIEW" => Some(ViewType::NestedView),
            "MY_VIEW" => Some(ViewType::MyView),
            "DASHBOARD_VIEW" => Some(ViewType::DashboardView),
            "PIPELINE_VIEW" => Some(ViewType::PipelineView),
            _ => None,
        }
    }

    /// Server-side class implementing the view.
    pub fn mode(&self) -> &'static str {
        match self {
            ViewType::ListView => "hudson.model.ListView",
            ViewType::NestedView => "hudson.plugins.nested_view.NestedView",
            ViewType::MyView => "hudson.model.MyView",
            ViewType::DashboardView => "hudson.plugins.view.dashboard.Dashboard",
            ViewType::PipelineView => {
                "au.com.centrumsystems.hudson.plugin.buildpipeline.BuildPipelineView"
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViewList {
    #[serde(default)]
    pub views: Vec<View>,
}

impl Jenkins {
    /// All views defined on the server.
    pub async fn views(&self) -> Result<Vec<View>> {
        let list: ViewList = self.get_json("api/json", "server").await?;
        Ok(list.views)
    }

    /// Creates a view of the given type.
    pub async fn create_view(&self, name: &str, view_type: ViewType) -> Result<()> {
        let json = serde_json::json!({"name": name, "mode": view_type.mode()}).to_string();
        let form = [
            ("name", name),
            ("mode", view_type.mode()),
            ("json", json.as_str()),
        ];
        self.post_form("createView", &form, &format!("view {name}"))
            .await?;
        Ok(())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{serve, test_config};
    use axum::Json;
    use axum::extract::Form;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use std::collections::HashMap;

    #[test]
    fn parses_every_variant() {
        for (spelling, expected) in [
            ("LIST_VIEW", ViewType::ListView),
            ("NESTED_VIEW", ViewType::NestedView),
            ("MY_VIEW", ViewType::MyView),
            ("DASHBOARD_VIEW", ViewType::DashboardView),
            ("PIPELINE_VIEW", ViewType::PipelineView),
        ] {
            assert_eq!(ViewType::from_arg(spelling), Some(expected));
        }
    }

    #[test]
    fn rejects_unknown_spellings() {
        assert_eq!(ViewType::from_arg("list_view"), None);
        assert_eq!(ViewType::from_arg("LISTVIEW"), None);
        assert_eq!(ViewType::from_arg(""), None);
    }

    #[test]
    fn modes_are_view_classes() {
        assert_eq!(ViewType::ListView.mode(), "hudson.model.ListView");
        assert_eq!(ViewType::MyView.mode(), "hudson.model.MyView");
    }

    #[test]
    fn deserialize_view_list() -> Result<()> {
        let content = r#"
            {
                "views": [
                    {"name": "All", "url": "http://jenkins.example.com/"},
                    {"name": "Nightly", "url": "http://jenkins.example.com/view/Nightly/"}
                ]
            }
        "#;
        let list: ViewList = serde_json::from_str(content)?;
        assert_eq!(list.views.len(), 2);
        assert_eq!(list.views[1].name, "Nightly");
        Ok(())
    }

    fn mock_router() -> axum::Router {
        axum::Router::new()
            .route("/api/json", get(|| async { Json(serde_json::json!({})) }))
            .route(
                "/createView",
                post(|Form(form): Form<HashMap<String, String>>| async move {
                    let name_ok = form.get("name").map(String::as_str) == Some("Nightly");
                    let mode_ok =
                        form.get("mode").map(String::as_str) == Some("hudson.model.ListView");
                    if name_ok && mode_ok {
                        StatusCode::OK
                    } else {
                        StatusCode::BAD_REQUEST
                    }
                }),
            )
    }

    #[tokio::test]
    async fn create_view_posts_name_and_mode() {
        let server = serve(mock_router()).await;
        let jenkins = Jenkins::init(&test_config(&server)).await.unwrap();

        jenkins
            .create_view("Nightly", ViewType::ListView)
            .await
            .unwrap();
    }
}
