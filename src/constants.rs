//! Plivo API constants.

use std::time::Duration;

/// The Plivo API base URL.
pub const PLIVO_API_URL: &str = "https://api-qa.voice.plivodev.com";

/// The Plivo API version path segment.
pub const API_VERSION: &str = "v1";

/// The maximum number of objects a single list call can return.
///
/// The API rejects `limit` values above this, so we reject them client-side
/// before dispatching the request.
pub const MAX_LIST_LIMIT: u64 = 20;

/// The default timeout applied to every request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
