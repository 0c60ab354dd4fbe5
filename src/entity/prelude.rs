//! 预导入模块，方便使用

pub use super::announcements::{
    ActiveModel as AnnouncementActiveModel, Entity as Announcements, Model as AnnouncementModel,
};
pub use super::contact_infos::{
    ActiveModel as ContactInfoActiveModel, Entity as ContactInfos, Model as ContactInfoModel,
};
pub use super::enrollment_categories::{
    ActiveModel as EnrollmentCategoryActiveModel, Entity as EnrollmentCategories,
    Model as EnrollmentCategoryModel,
};
pub use super::enrollment_processes::{
    ActiveModel as EnrollmentProcessActiveModel, Entity as EnrollmentProcesses,
    Model as EnrollmentProcessModel,
};
pub use super::enrollment_requirements::{
    ActiveModel as EnrollmentRequirementActiveModel, Entity as EnrollmentRequirements,
    Model as EnrollmentRequirementModel,
};
pub use super::events::{ActiveModel as EventActiveModel, Entity as Events, Model as EventModel};
pub use super::gallery_comments::{
    ActiveModel as GalleryCommentActiveModel, Entity as GalleryComments,
    Model as GalleryCommentModel,
};
pub use super::gallery_images::{
    ActiveModel as GalleryImageActiveModel, Entity as GalleryImages, Model as GalleryImageModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::page_contents::{
    ActiveModel as PageContentActiveModel, Entity as PageContents, Model as PageContentModel,
};
pub use super::principal_awards::{
    ActiveModel as PrincipalAwardActiveModel, Entity as PrincipalAwards,
    Model as PrincipalAwardModel,
};
pub use super::principal_profiles::{
    ActiveModel as PrincipalProfileActiveModel, Entity as PrincipalProfiles,
    Model as PrincipalProfileModel,
};
pub use super::site_themes::{
    ActiveModel as SiteThemeActiveModel, Entity as SiteThemes, Model as SiteThemeModel,
};
pub use super::special_programs::{
    ActiveModel as SpecialProgramActiveModel, Entity as SpecialPrograms,
    Model as SpecialProgramModel,
};
pub use super::staff_profiles::{
    ActiveModel as StaffProfileActiveModel, Entity as StaffProfiles, Model as StaffProfileModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
