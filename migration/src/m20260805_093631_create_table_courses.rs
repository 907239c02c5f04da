use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Courses::Title).text().not_null())
                    .col(
                        ColumnDef::new(Courses::ShortDescription)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::Category).text().not_null())
                    .col(ColumnDef::new(Courses::Level).text().not_null())
                    .col(ColumnDef::new(Courses::Duration).text().not_null())
                    .col(
                        ColumnDef::new(Courses::Projects)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Courses::Modes)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Courses::PriceOnline).double())
                    .col(ColumnDef::new(Courses::PriceOffline).double())
                    .col(ColumnDef::new(Courses::Icon).text().not_null())
                    .col(ColumnDef::new(Courses::Gradient).text().not_null())
                    // Curriculum is a nested document owned by the frontend
                    .col(
                        ColumnDef::new(Courses::Curriculum)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Courses::Tools)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Courses::Features)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Courses::Popular)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Courses::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Courses::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_courses_active_sort
                ON courses (active, sort_order, created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_courses_active_sort;")
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Title,
    ShortDescription,
    Category,
    Level,
    Duration,
    Projects,
    Modes,
    PriceOnline,
    PriceOffline,
    Icon,
    Gradient,
    Curriculum,
    Tools,
    Features,
    Popular,
    Active,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
