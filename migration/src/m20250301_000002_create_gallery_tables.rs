use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_content_tables::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 相册图片表 ====================
        manager
            .create_table(
                Table::create()
                    .table(GalleryImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GalleryImages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GalleryImages::Title).string().not_null())
                    .col(ColumnDef::new(GalleryImages::Description).text().null())
                    .col(ColumnDef::new(GalleryImages::Category).string().not_null())
                    .col(ColumnDef::new(GalleryImages::ImagePath).string().not_null())
                    .col(
                        ColumnDef::new(GalleryImages::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(GalleryImages::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(GalleryImages::UploadedBy).big_integer().null())
                    .col(
                        ColumnDef::new(GalleryImages::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GalleryImages::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GalleryImages::DeletedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(GalleryImages::Table, GalleryImages::UploadedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 相册评论表 ====================
        manager
            .create_table(
                Table::create()
                    .table(GalleryComments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GalleryComments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GalleryComments::GalleryImageId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GalleryComments::GuestName).string().not_null())
                    .col(ColumnDef::new(GalleryComments::GuestId).string().not_null())
                    .col(
                        ColumnDef::new(GalleryComments::BrowserFingerprint)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(GalleryComments::IpAddress).string().null())
                    .col(ColumnDef::new(GalleryComments::Content).text().not_null())
                    .col(
                        ColumnDef::new(GalleryComments::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(GalleryComments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GalleryComments::Table, GalleryComments::GalleryImageId)
                            .to(GalleryImages::Table, GalleryImages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 管理通知表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Notifications::NotificationType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(ColumnDef::new(Notifications::Link).string().null())
                    .col(ColumnDef::new(Notifications::Data).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 评论限流查询依赖的索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_gallery_comments_guest_id")
                    .table(GalleryComments::Table)
                    .col(GalleryComments::GuestId)
                    .col(GalleryComments::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_gallery_comments_image_id")
                    .table(GalleryComments::Table)
                    .col(GalleryComments::GalleryImageId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_notifications_is_read")
                    .table(Notifications::Table)
                    .col(Notifications::IsRead)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GalleryComments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GalleryImages::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum GalleryImages {
    #[sea_orm(iden = "gallery_images")]
    Table,
    Id,
    Title,
    Description,
    Category,
    ImagePath,
    IsActive,
    SortOrder,
    UploadedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum GalleryComments {
    #[sea_orm(iden = "gallery_comments")]
    Table,
    Id,
    GalleryImageId,
    GuestName,
    GuestId,
    BrowserFingerprint,
    IpAddress,
    Content,
    IsApproved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    NotificationType,
    Title,
    Message,
    Link,
    Data,
    IsRead,
    CreatedAt,
}
