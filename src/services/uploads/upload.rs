use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::store::{
    StoredUpload, discard_upload, next_field, sanitize_folder, store_file_field,
};
use crate::config::AppConfig;
use crate::models::uploads::{UploadQuery, UploadResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_upload(
    query: UploadQuery,
    _request: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let folder = match sanitize_folder(query.folder.as_deref()) {
        Ok(folder) => folder,
        Err(msg) => return Ok(ApiResponse::validation(msg)),
    };

    let mut stored: Option<StoredUpload> = None;

    loop {
        let mut field = match next_field(&mut payload).await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(response) => {
                if let Some(upload) = &stored {
                    discard_upload(&upload.path).await;
                }
                return Ok(response);
            }
        };
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name != "file" {
            continue;
        }

        if let Some(previous) = &stored {
            discard_upload(&previous.path).await;
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_detail(
                ErrorCode::MultifileUploadNotAllowed,
                "File upload rejected",
                "Only one file can be uploaded at a time",
            )));
        }

        match store_file_field(&mut field, &folder).await {
            Ok(upload) => stored = Some(upload),
            Err(response) => return Ok(response),
        }
    }

    let Some(upload) = stored else {
        return Ok(
            HttpResponse::UnprocessableEntity().json(ApiResponse::error_detail(
                ErrorCode::FileNotFound,
                "File upload rejected",
                "No file found in upload payload",
            )),
        );
    };

    let response = UploadResponse {
        url: AppConfig::get().public_url(&upload.path),
        path: upload.path,
        size: upload.size,
        content_type: upload.content_type,
    };

    Ok(HttpResponse::Created().json(ApiResponse::success(response, "File uploaded")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::PayloadError;
    use actix_web::http::StatusCode;
    use actix_web::http::header::{self, HeaderMap, HeaderValue};
    use actix_web::test::TestRequest;
    use actix_web::web::Bytes;

    #[actix_web::test]
    async fn test_interrupted_payload_is_bad_request() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("multipart/form-data; boundary=upload-boundary"),
        );
        let stream = futures_util::stream::iter(vec![Err::<Bytes, _>(PayloadError::Incomplete(
            None,
        ))]);
        let payload = Multipart::new(&headers, stream);

        let req = TestRequest::default().to_http_request();
        let query = UploadQuery {
            folder: Some("news".to_string()),
        };
        let resp = handle_upload(query, &req, payload).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
