use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use business::domain::errors::RemoteError;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Maps a non-2xx response to [`RemoteError::Rejected`], keeping the
/// server's `message` when the body carries one.
async fn ensure_success(
    result: Result<Response, reqwest::Error>,
) -> Result<Response, RemoteError> {
    let response = result.map_err(|e| RemoteError::transport(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(RemoteError::rejected(status.as_u16(), message))
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    result: Result<Response, reqwest::Error>,
) -> Result<T, RemoteError> {
    ensure_success(result)
        .await?
        .json::<T>()
        .await
        .map_err(|_| RemoteError::invalid_response())
}

/// For endpoints whose success body is irrelevant.
pub(crate) async fn discard_body(
    result: Result<Response, reqwest::Error>,
) -> Result<(), RemoteError> {
    ensure_success(result).await.map(|_| ())
}
