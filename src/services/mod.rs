pub mod announcements;
pub mod auth;
pub mod comments;
pub mod contact;
pub mod enrollment;
pub mod events;
pub mod gallery;
pub mod notifications;
pub mod pages;
pub mod principal;
pub mod programs;
pub mod search;
pub mod staff;
pub mod storage_files;
pub mod themes;
pub mod uploads;
pub mod users;

pub use announcements::AnnouncementService;
pub use auth::AuthService;
pub use comments::CommentService;
pub use contact::ContactService;
pub use enrollment::EnrollmentService;
pub use events::EventService;
pub use gallery::GalleryService;
pub use notifications::NotificationService;
pub use pages::PageService;
pub use principal::PrincipalService;
pub use programs::ProgramService;
pub use search::SearchService;
pub use staff::StaffService;
pub use storage_files::StorageFileService;
pub use themes::ThemeService;
pub use uploads::UploadService;
pub use users::UserService;

use actix_web::{HttpRequest, Result as ActixResult, web};
use std::sync::Arc;

use crate::storage::Storage;

/// 从 app data 中取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not found in app data"))
}

/// 生成服务结构体：存储实例延迟到首个请求时从 app data 获取
macro_rules! lazy_service {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name {
            storage: Option<std::sync::Arc<dyn $crate::storage::Storage>>,
        }

        impl $name {
            pub fn new_lazy() -> Self {
                Self { storage: None }
            }

            #[cfg(test)]
            pub(crate) fn with_storage(storage: std::sync::Arc<dyn $crate::storage::Storage>) -> Self {
                Self {
                    storage: Some(storage),
                }
            }

            pub(crate) fn get_storage(
                &self,
                request: &actix_web::HttpRequest,
            ) -> actix_web::Result<std::sync::Arc<dyn $crate::storage::Storage>> {
                match &self.storage {
                    Some(storage) => Ok(storage.clone()),
                    None => $crate::services::storage_from_request(request),
                }
            }
        }
    };
}

pub(crate) use lazy_service;
