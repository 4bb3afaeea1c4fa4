//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (search, select, edit a draft field)
/// - Request lifecycle events (started, failed, finished)
/// - API responses (a freshly fetched product list)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
