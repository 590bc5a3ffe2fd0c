use serde::{Deserialize, Serialize};

/// A node of the generated route table
///
/// Leaves carry `exact: true` and a page `component`. Branches carry nested
/// `routes` and usually a layout `component`, and are never exact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Route>>,
}

impl Route {
    /// A page route matched exactly
    pub fn page(path: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            exact: Some(true),
            component: Some(component.into()),
            routes: None,
        }
    }

    /// A layout route wrapping `routes`
    pub fn layout(path: impl Into<String>, component: impl Into<String>, routes: Vec<Route>) -> Self {
        Self {
            path: path.into(),
            exact: None,
            component: Some(component.into()),
            routes: Some(routes),
        }
    }

    pub fn is_exact(&self) -> bool {
        self.exact.unwrap_or(false)
    }

    /// Nested routes, empty for leaves
    pub fn children(&self) -> &[Route] {
        self.routes.as_deref().unwrap_or_default()
    }
}
