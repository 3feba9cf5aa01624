use common::models::HOME_BANNER;

/// Landing page handler
/// Returns the lab banner as `text/plain; charset=utf-8`
#[tracing::instrument]
pub async fn index() -> &'static str {
    HOME_BANNER
}
