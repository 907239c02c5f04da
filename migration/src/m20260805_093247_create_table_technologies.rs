use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Technologies::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Technologies::Name).text().not_null())
                    .col(ColumnDef::new(Technologies::Category).text().not_null())
                    .col(ColumnDef::new(Technologies::Icon).text().not_null())
                    .col(
                        ColumnDef::new(Technologies::Expertise)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Technologies::Color).text().not_null())
                    .col(
                        ColumnDef::new(Technologies::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Technologies::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Technologies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Technologies::UpdatedAt)
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
                CREATE INDEX IF NOT EXISTS idx_technologies_active_sort
                ON technologies (active, sort_order, created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_technologies_active_sort;")
            .await?;

        manager
            .drop_table(Table::drop().table(Technologies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Technologies {
    Table,
    Id,
    Name,
    Category,
    Icon,
    Expertise,
    Color,
    Active,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
