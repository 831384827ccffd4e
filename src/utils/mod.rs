/// Timezone resolution and timestamp formatting
pub mod datetime;
/// Consistently formatted log helpers
pub mod logging;
