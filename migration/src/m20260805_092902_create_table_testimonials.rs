use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Testimonials::Name).text().not_null())
                    .col(ColumnDef::new(Testimonials::Role).text().not_null())
                    .col(ColumnDef::new(Testimonials::Company).text().not_null())
                    .col(ColumnDef::new(Testimonials::Quote).text().not_null())
                    .col(ColumnDef::new(Testimonials::Image).text())
                    .col(
                        ColumnDef::new(Testimonials::Rating)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(
                        ColumnDef::new(Testimonials::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Testimonials::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Testimonials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Testimonials::UpdatedAt)
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
                CREATE INDEX IF NOT EXISTS idx_testimonials_active_sort
                ON testimonials (active, sort_order, created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_testimonials_active_sort;")
            .await?;

        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Role,
    Company,
    Quote,
    Image,
    Rating,
    Active,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
