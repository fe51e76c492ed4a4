use crate::resolver::ListError;
use crate::view::ViewPort;

/// Replace the list with a failure block describing `error`.
pub fn show<V: ViewPort + ?Sized>(view: &mut V, error: &ListError) {
    tracing::error!("Page could not be built: {}", error);
    view.render_error(&error.to_string());
}
