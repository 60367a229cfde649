//! Request extractors

use crate::WebError;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};

/// JSON body extractor whose rejection is a `WebError`
///
/// A missing content type, malformed JSON or a missing field is answered with
/// the same `{error, message}` body as every other failure.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header::CONTENT_TYPE};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TargetDir {
        filepath: String,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let req = request(Some("application/json"), r#"{"filepath":"docs"}"#);
        let ApiJson(body) = ApiJson::<TargetDir>::from_request(req, &()).await.unwrap();
        assert_eq!(body.filepath, "docs");
    }

    #[tokio::test]
    async fn test_rejections_become_web_errors() {
        let cases = [
            request(None, r#"{"filepath":"docs"}"#),
            request(Some("application/json"), "{not json"),
            request(Some("application/json"), r#"{"other":1}"#),
        ];

        for req in cases {
            let err = ApiJson::<TargetDir>::from_request(req, &()).await.unwrap_err();
            assert!(matches!(err, WebError::InvalidRequest(_)));
        }
    }
}
