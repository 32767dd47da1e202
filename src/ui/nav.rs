use std::sync::Arc;

/// Callback asking the host shell to show another page.
pub type Navigate = Arc<dyn Fn(&str) + Send + Sync>;

pub const PAGE_DASHBOARD: &str = "dashboard";
