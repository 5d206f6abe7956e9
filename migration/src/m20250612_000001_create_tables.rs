use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(
                        ColumnDef::new(Users::EmailVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建院系表
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Departments::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Departments::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Departments::Description).text().null())
                    .col(ColumnDef::new(Departments::Faculty).string().null())
                    .col(
                        ColumnDef::new(Departments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Departments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::DepartmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::CourseNumber).string().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::CreditHours).integer().null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::Prerequisites).text().null())
                    .col(ColumnDef::new(Courses::Corequisites).text().null())
                    .col(ColumnDef::new(Courses::Syllabus).text().null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // (department_id, course_number) 唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_department_number")
                    .table(Courses::Table)
                    .col(Courses::DepartmentId)
                    .col(Courses::CourseNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建教授表
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .col(
                        ColumnDef::new(Professors::Title)
                            .string()
                            .not_null()
                            .default("Professor"),
                    )
                    .col(
                        ColumnDef::new(Professors::Email)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Professors::Bio).text().null())
                    .col(ColumnDef::new(Professors::Office).string().null())
                    .col(ColumnDef::new(Professors::OfficeHours).string().null())
                    .col(
                        ColumnDef::new(Professors::AvgRating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Professors::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professors::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 教授-院系关联表
        manager
            .create_table(
                Table::create()
                    .table(ProfessorDepartments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessorDepartments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorDepartments::ProfessorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorDepartments::DepartmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ProfessorDepartments::Table,
                                ProfessorDepartments::ProfessorId,
                            )
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ProfessorDepartments::Table,
                                ProfessorDepartments::DepartmentId,
                            )
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_professor_departments_unique")
                    .table(ProfessorDepartments::Table)
                    .col(ProfessorDepartments::ProfessorId)
                    .col(ProfessorDepartments::DepartmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 教授-课程关联表（任教课程）
        manager
            .create_table(
                Table::create()
                    .table(ProfessorCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessorCourses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorCourses::ProfessorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorCourses::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProfessorCourses::Table, ProfessorCourses::ProfessorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProfessorCourses::Table, ProfessorCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_professor_courses_unique")
                    .table(ProfessorCourses::Table)
                    .col(ProfessorCourses::ProfessorId)
                    .col(ProfessorCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建评价表
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::ReviewType).string().not_null())
                    .col(ColumnDef::new(Reviews::CourseId).big_integer().null())
                    .col(ColumnDef::new(Reviews::DepartmentId).big_integer().null())
                    .col(ColumnDef::new(Reviews::ProfessorId).big_integer().null())
                    .col(ColumnDef::new(Reviews::Title).string().not_null())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::Content).text().not_null())
                    .col(ColumnDef::new(Reviews::AuthorId).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::AuthorUsername).string().not_null())
                    .col(ColumnDef::new(Reviews::Upvotes).text().not_null())
                    .col(ColumnDef::new(Reviews::Downvotes).text().not_null())
                    .col(ColumnDef::new(Reviews::Status).string().not_null())
                    .col(ColumnDef::new(Reviews::Reports).text().not_null())
                    .col(
                        ColumnDef::new(Reviews::ReportCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Reviews::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Reviews::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 用户表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        // 院系表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_departments_code")
                    .table(Departments::Table)
                    .col(Departments::Code)
                    .to_owned(),
            )
            .await?;

        // 课程表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_course_number")
                    .table(Courses::Table)
                    .col(Courses::CourseNumber)
                    .to_owned(),
            )
            .await?;

        // 评价表索引：按目标、状态、作者的常用查询路径
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_professor_status")
                    .table(Reviews::Table)
                    .col(Reviews::ProfessorId)
                    .col(Reviews::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_course_id")
                    .table(Reviews::Table)
                    .col(Reviews::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_author_id")
                    .table(Reviews::Table)
                    .col(Reviews::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_report_count")
                    .table(Reviews::Table)
                    .col(Reviews::ReportCount)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfessorCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfessorDepartments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    EmailVerified,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    Name,
    Code,
    Description,
    Faculty,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    DepartmentId,
    CourseNumber,
    Name,
    CreditHours,
    Description,
    Prerequisites,
    Corequisites,
    Syllabus,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Professors {
    #[sea_orm(iden = "professors")]
    Table,
    Id,
    Name,
    Title,
    Email,
    Bio,
    Office,
    OfficeHours,
    AvgRating,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProfessorDepartments {
    #[sea_orm(iden = "professor_departments")]
    Table,
    Id,
    ProfessorId,
    DepartmentId,
}

#[derive(DeriveIden)]
enum ProfessorCourses {
    #[sea_orm(iden = "professor_courses")]
    Table,
    Id,
    ProfessorId,
    CourseId,
}

#[derive(DeriveIden)]
enum Reviews {
    #[sea_orm(iden = "reviews")]
    Table,
    Id,
    ReviewType,
    CourseId,
    DepartmentId,
    ProfessorId,
    Title,
    Rating,
    Content,
    AuthorId,
    AuthorUsername,
    Upvotes,
    Downvotes,
    Status,
    Reports,
    ReportCount,
    CreatedAt,
    UpdatedAt,
}
