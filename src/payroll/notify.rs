use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

/// User-facing feedback for a filter action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Toast {
    #[schema(example = "Date Range Applied")]
    pub title: String,
    #[schema(example = "Showing entries for today, Jan 10, 2024")]
    pub description: String,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

pub trait ToastSink {
    fn notify(&mut self, toast: Toast);
}

/// Collects toasts, e.g. to hand them back in an HTTP response.
impl ToastSink for Vec<Toast> {
    fn notify(&mut self, toast: Toast) {
        info!(title = %toast.title, description = %toast.description, "Toast");
        self.push(toast);
    }
}
