//! Presentation port: the surface the core pushes UI state to.

use serde_json::Value;

use crate::domain::Message;

/// Port for the presentation surface.
///
/// The core calls these methods and never reads UI state back. `render` is
/// invoked once per new or updated message, in log order; a message whose
/// status advanced is re-rendered with the same identifier.
pub trait Presenter: Send + Sync {
    /// Renders a new or updated message.
    fn render(&self, message: &Message);

    /// Renders the connectivity indicator.
    fn render_status(&self, is_online: bool);

    /// Renders a search-result payload.
    ///
    /// Routed through untouched from [`crate::ports::GatewayEvent::QueryResult`];
    /// formatting belongs to the search display surface.
    fn render_results(&self, results: &Value);
}
