use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::Response,
};
use serde::de::DeserializeOwned;

/// JSON body extractor that never rejects a well-formed request.
///
/// An empty body, a body that cannot be read (over the body size limit or
/// cut off mid-stream), a body that is not JSON, and JSON of the wrong shape
/// all yield `None`, leaving the handler to decide what absence means. The
/// content type is not checked.
pub struct LenientJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(rejection) => {
                tracing::warn!(
                    status = %rejection.status(),
                    "Ignoring unreadable request body: {}",
                    rejection.body_text()
                );
                return Ok(LenientJson(None));
            }
        };

        if body.iter().all(u8::is_ascii_whitespace) {
            tracing::debug!("Request body is empty");
            return Ok(LenientJson(None));
        }

        match serde_json::from_slice::<T>(&body) {
            Ok(value) => Ok(LenientJson(Some(value))),
            Err(e) => {
                tracing::warn!("Ignoring unparseable JSON request body: {}", e);
                Ok(LenientJson(None))
            }
        }
    }
}
