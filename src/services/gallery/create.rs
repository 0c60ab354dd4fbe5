use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{GALLERY_FOLDER, GalleryService, validate_image_fields};
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::ErrorCode;
use crate::models::gallery::requests::CreateGalleryImage;
use crate::services::uploads::store::{
    StoredUpload, discard_upload, next_field, read_text_field, store_file_field,
};

#[derive(Debug, Default)]
struct ImageForm {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    sort_order: Option<String>,
}

/// 把表单字段组装为新图片记录
fn build_image(
    form: ImageForm,
    upload: &StoredUpload,
    uploaded_by: Option<i64>,
) -> Result<CreateGalleryImage, &'static str> {
    let title = form.title.unwrap_or_default().trim().to_string();
    let category = form
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "general".to_string());
    validate_image_fields(&title, &category)?;

    let sort_order = match form.sort_order.as_deref().map(str::trim) {
        None | Some("") => 0,
        Some(raw) => raw.parse().map_err(|_| "sort_order must be an integer")?,
    };

    Ok(CreateGalleryImage {
        title,
        description: form
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        category,
        image_path: upload.path.clone(),
        sort_order,
        uploaded_by,
    })
}

pub async fn create_image(
    service: &GalleryService,
    request: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let mut form = ImageForm::default();
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

        let text = match name.as_str() {
            "file" => {
                if let Some(previous) = &stored {
                    discard_upload(&previous.path).await;
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_detail(
                        ErrorCode::MultifileUploadNotAllowed,
                        "File upload rejected",
                        "Only one file can be uploaded at a time",
                    )));
                }
                match store_file_field(&mut field, GALLERY_FOLDER).await {
                    Ok(upload) => stored = Some(upload),
                    Err(response) => return Ok(response),
                }
                continue;
            }
            "title" | "description" | "category" | "sort_order" => {
                match read_text_field(&mut field).await {
                    Ok(text) => text,
                    Err(response) => {
                        if let Some(upload) = &stored {
                            discard_upload(&upload.path).await;
                        }
                        return Ok(response);
                    }
                }
            }
            _ => continue,
        };

        match name.as_str() {
            "title" => form.title = Some(text),
            "description" => form.description = Some(text),
            "category" => form.category = Some(text),
            _ => form.sort_order = Some(text),
        }
    }

    let Some(upload) = stored else {
        return Ok(
            HttpResponse::UnprocessableEntity().json(ApiResponse::error_detail(
                ErrorCode::FileNotFound,
                "Validation failed",
                "An image file is required",
            )),
        );
    };

    // 相册只接受图片
    if !upload.content_type.starts_with("image/") {
        discard_upload(&upload.path).await;
        return Ok(ApiResponse::validation("Gallery uploads must be images"));
    }

    let new_image = match build_image(form, &upload, RequireJWT::extract_user_id(request)) {
        Ok(image) => image,
        Err(msg) => {
            discard_upload(&upload.path).await;
            return Ok(ApiResponse::validation(msg));
        }
    };

    let storage = service.get_storage(request)?;

    match storage.create_gallery_image(new_image).await {
        Ok(image) => {
            tracing::info!("Gallery image {} uploaded", image.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(image, "Image uploaded")))
        }
        Err(e) => {
            discard_upload(&upload.path).await;
            Ok(ApiResponse::from_error(&e, "Failed to save image"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload() -> StoredUpload {
        StoredUpload {
            path: "gallery/1-a.png".into(),
            size: 10,
            content_type: "image/png".into(),
        }
    }

    #[test]
    fn test_build_image_defaults() {
        let form = ImageForm {
            title: Some("  Graduation ".into()),
            description: Some("   ".into()),
            ..Default::default()
        };
        let image = build_image(form, &upload(), Some(3)).unwrap();
        assert_eq!(image.title, "Graduation");
        assert_eq!(image.category, "general");
        assert_eq!(image.description, None);
        assert_eq!(image.sort_order, 0);
        assert_eq!(image.image_path, "gallery/1-a.png");
        assert_eq!(image.uploaded_by, Some(3));
    }

    #[test]
    fn test_build_image_rejects_bad_fields() {
        let form = ImageForm::default();
        assert!(build_image(form, &upload(), None).is_err());

        let form = ImageForm {
            title: Some("Sports".into()),
            sort_order: Some("first".into()),
            ..Default::default()
        };
        assert!(build_image(form, &upload(), None).is_err());

        let form = ImageForm {
            title: Some("Sports".into()),
            sort_order: Some(" 4 ".into()),
            ..Default::default()
        };
        assert_eq!(build_image(form, &upload(), None).unwrap().sort_order, 4);
    }

    fn broken_multipart() -> Multipart {
        use actix_web::error::PayloadError;
        use actix_web::http::header::{self, HeaderMap, HeaderValue};
        use actix_web::web::Bytes;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("multipart/form-data; boundary=gallery-boundary"),
        );
        let stream = futures_util::stream::iter(vec![Err::<Bytes, _>(PayloadError::Incomplete(
            None,
        ))]);
        Multipart::new(&headers, stream)
    }

    #[actix_web::test]
    async fn test_stream_error_is_bad_request() {
        use crate::storage::sea_orm_storage::memory_storage;
        use actix_web::http::StatusCode;
        use std::sync::Arc;

        let service = GalleryService::with_storage(Arc::new(memory_storage().await));
        let req = actix_web::test::TestRequest::default().to_http_request();

        let resp = create_image(&service, &req, broken_multipart()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Malformed multipart payload");
    }
}
