//! Page routes - full HTML page renders.

use crate::templates::IndexTemplate;

/// Landing page with the translation form.
pub async fn index() -> IndexTemplate {
    IndexTemplate::new()
}
