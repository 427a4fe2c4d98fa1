use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SignupRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SignupRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SignupRequests::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SignupRequests::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(SignupRequests::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SignupRequests::Status)
                            .string_len(10)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(SignupRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SignupRequests::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(SignupRequests::UserId).uuid().null())
                    .col(
                        ColumnDef::new(SignupRequests::RejectedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SignupRequests::RejectionReason)
                            .string_len(500)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE signup_requests
                ADD CONSTRAINT chk_signup_requests_status
                CHECK (status IN ('pending', 'approved', 'rejected'));
                "#,
            )
            .await?;

        // The admin dashboard lists pending requests newest first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_signup_requests_pending
                ON signup_requests (created_at DESC)
                WHERE status = 'pending';
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_signup_requests_pending")
            .await?;

        manager
            .drop_table(Table::drop().table(SignupRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SignupRequests {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Status,
    CreatedAt,
    ApprovedAt,
    UserId,
    RejectedAt,
    RejectionReason,
}
