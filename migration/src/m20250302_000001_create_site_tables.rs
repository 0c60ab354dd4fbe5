use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 校长信息表 ====================
        manager
            .create_table(
                Table::create()
                    .table(PrincipalProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrincipalProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PrincipalProfiles::FullName).string().not_null())
                    .col(ColumnDef::new(PrincipalProfiles::Title).string().not_null())
                    .col(ColumnDef::new(PrincipalProfiles::Message).text().null())
                    .col(ColumnDef::new(PrincipalProfiles::Bio).text().null())
                    .col(ColumnDef::new(PrincipalProfiles::PhotoPath).string().null())
                    .col(ColumnDef::new(PrincipalProfiles::Email).string().null())
                    .col(
                        ColumnDef::new(PrincipalProfiles::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PrincipalProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrincipalProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 校长荣誉表 ====================
        manager
            .create_table(
                Table::create()
                    .table(PrincipalAwards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrincipalAwards::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PrincipalAwards::PrincipalProfileId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PrincipalAwards::Title).string().not_null())
                    .col(ColumnDef::new(PrincipalAwards::AwardingBody).string().null())
                    .col(ColumnDef::new(PrincipalAwards::Year).integer().not_null())
                    .col(ColumnDef::new(PrincipalAwards::Description).text().null())
                    .col(
                        ColumnDef::new(PrincipalAwards::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PrincipalAwards::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrincipalAwards::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PrincipalAwards::Table, PrincipalAwards::PrincipalProfileId)
                            .to(PrincipalProfiles::Table, PrincipalProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 招生类别表 ====================
        manager
            .create_table(
                Table::create()
                    .table(EnrollmentCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EnrollmentCategories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EnrollmentCategories::Name).string().not_null())
                    .col(ColumnDef::new(EnrollmentCategories::Description).text().null())
                    .col(
                        ColumnDef::new(EnrollmentCategories::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(EnrollmentCategories::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EnrollmentCategories::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EnrollmentCategories::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 招生材料要求表 ====================
        manager
            .create_table(
                Table::create()
                    .table(EnrollmentRequirements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EnrollmentRequirements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EnrollmentRequirements::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EnrollmentRequirements::Title).string().not_null())
                    .col(
                        ColumnDef::new(EnrollmentRequirements::Description)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EnrollmentRequirements::IsRequired)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(EnrollmentRequirements::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EnrollmentRequirements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EnrollmentRequirements::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                EnrollmentRequirements::Table,
                                EnrollmentRequirements::CategoryId,
                            )
                            .to(EnrollmentCategories::Table, EnrollmentCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 招生流程表 ====================
        manager
            .create_table(
                Table::create()
                    .table(EnrollmentProcesses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EnrollmentProcesses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EnrollmentProcesses::StepNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EnrollmentProcesses::Title).string().not_null())
                    .col(ColumnDef::new(EnrollmentProcesses::Description).text().null())
                    .col(
                        ColumnDef::new(EnrollmentProcesses::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(EnrollmentProcesses::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EnrollmentProcesses::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 页面内容表 ====================
        manager
            .create_table(
                Table::create()
                    .table(PageContents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PageContents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PageContents::Page).string().not_null())
                    .col(ColumnDef::new(PageContents::SectionKey).string().not_null())
                    .col(ColumnDef::new(PageContents::Title).string().null())
                    .col(ColumnDef::new(PageContents::Content).text().null())
                    .col(ColumnDef::new(PageContents::Metadata).text().not_null())
                    .col(
                        ColumnDef::new(PageContents::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PageContents::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PageContents::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PageContents::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 联系方式表（单行） ====================
        manager
            .create_table(
                Table::create()
                    .table(ContactInfos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactInfos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactInfos::Address).string().null())
                    .col(ColumnDef::new(ContactInfos::Phone).string().null())
                    .col(ColumnDef::new(ContactInfos::Email).string().null())
                    .col(ColumnDef::new(ContactInfos::OfficeHours).string().null())
                    .col(ColumnDef::new(ContactInfos::FacebookUrl).string().null())
                    .col(ColumnDef::new(ContactInfos::MapEmbedUrl).text().null())
                    .col(
                        ColumnDef::new(ContactInfos::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 站点主题表 ====================
        manager
            .create_table(
                Table::create()
                    .table(SiteThemes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteThemes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SiteThemes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SiteThemes::PrimaryColor).string().not_null())
                    .col(ColumnDef::new(SiteThemes::SecondaryColor).string().not_null())
                    .col(ColumnDef::new(SiteThemes::AccentColor).string().not_null())
                    .col(ColumnDef::new(SiteThemes::FontFamily).string().null())
                    .col(ColumnDef::new(SiteThemes::LogoPath).string().null())
                    .col(
                        ColumnDef::new(SiteThemes::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(SiteThemes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(SiteThemes::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_page_contents_page_section")
                    .table(PageContents::Table)
                    .col(PageContents::Page)
                    .col(PageContents::SectionKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteThemes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContactInfos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PageContents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EnrollmentProcesses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EnrollmentRequirements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EnrollmentCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PrincipalAwards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PrincipalProfiles::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum PrincipalProfiles {
    #[sea_orm(iden = "principal_profiles")]
    Table,
    Id,
    FullName,
    Title,
    Message,
    Bio,
    PhotoPath,
    Email,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PrincipalAwards {
    #[sea_orm(iden = "principal_awards")]
    Table,
    Id,
    PrincipalProfileId,
    Title,
    AwardingBody,
    Year,
    Description,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EnrollmentCategories {
    #[sea_orm(iden = "enrollment_categories")]
    Table,
    Id,
    Name,
    Description,
    IsActive,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EnrollmentRequirements {
    #[sea_orm(iden = "enrollment_requirements")]
    Table,
    Id,
    CategoryId,
    Title,
    Description,
    IsRequired,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EnrollmentProcesses {
    #[sea_orm(iden = "enrollment_processes")]
    Table,
    Id,
    StepNumber,
    Title,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PageContents {
    #[sea_orm(iden = "page_contents")]
    Table,
    Id,
    Page,
    SectionKey,
    Title,
    Content,
    Metadata,
    IsActive,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContactInfos {
    #[sea_orm(iden = "contact_infos")]
    Table,
    Id,
    Address,
    Phone,
    Email,
    OfficeHours,
    FacebookUrl,
    MapEmbedUrl,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SiteThemes {
    #[sea_orm(iden = "site_themes")]
    Table,
    Id,
    Name,
    PrimaryColor,
    SecondaryColor,
    AccentColor,
    FontFamily,
    LogoPath,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
