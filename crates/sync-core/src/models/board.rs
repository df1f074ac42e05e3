use serde::{Deserialize, Serialize};

/// A live task board as the upstream store describes it: an opaque external
/// identifier, the owning project, and the optional link to the reusable
/// template board. Synchronization is impossible without that link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub board_id: String,
    pub project_id: i64,
    pub template_board_id: Option<String>,
}

impl Board {
    pub fn new(
        board_id: impl Into<String>,
        project_id: i64,
        template_board_id: Option<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            project_id,
            template_board_id,
        }
    }

    pub fn has_template(&self) -> bool {
        self.template_board_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }
}
