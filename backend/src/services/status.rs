pub const LIVENESS_MESSAGE: &str = "Ice Cream Recipes API is running!";

/// `GET /`: plain-text liveness check.
pub(crate) async fn process() -> &'static str {
    LIVENESS_MESSAGE
}
