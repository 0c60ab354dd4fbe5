pub mod announcements;
pub mod auth;
pub mod enrollment;
pub mod events;
pub mod frontend;
pub mod gallery;
pub mod notifications;
pub mod pages;
pub mod principal;
pub mod programs;
pub mod search;
pub mod staff;
pub mod themes;
pub mod uploads;
pub mod users;

pub use announcements::configure_announcement_routes;
pub use auth::configure_auth_routes;
pub use enrollment::configure_enrollment_routes;
pub use events::configure_event_routes;
pub use frontend::configure_frontend_routes;
pub use gallery::configure_gallery_routes;
pub use notifications::configure_notification_routes;
pub use pages::configure_page_routes;
pub use principal::configure_principal_routes;
pub use programs::configure_program_routes;
pub use search::configure_search_routes;
pub use staff::configure_staff_routes;
pub use themes::configure_theme_routes;
pub use uploads::configure_upload_routes;
pub use users::configure_user_routes;
