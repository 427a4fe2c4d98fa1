use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Orders::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Orders::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Orders::TrackingNo)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Orders::Price).double().not_null())
                    .col(
                        ColumnDef::new(Orders::DressType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Orders::Status)
                            .string_len(10)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Orders::UserName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Orders::UserEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Orders::Measurements)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Orders::PickedUpAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE orders
                ADD CONSTRAINT chk_orders_status
                CHECK (status IN ('pending', 'cutting', 'stitching', 'ready', 'picked-up'));
                "#,
            )
            .await?;

        // "My orders" always filters on the owning user.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_orders_user_id
                ON orders (user_id, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_orders_user_id")
            .await?;

        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    UserId,
    TrackingNo,
    Price,
    DressType,
    Status,
    UserName,
    UserEmail,
    Measurements,
    CreatedAt,
    PickedUpAt,
}
