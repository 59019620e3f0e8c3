use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202607010002_create_session_reservations"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("session_reservations"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("category")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("arrival_date"))
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("shift_name"))
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("shift_start"))
                            .time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("shift_end")).time().not_null())
                    .col(ColumnDef::new(Alias::new("full_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("group_member1")).string().null())
                    .col(ColumnDef::new(Alias::new("group_member2")).string().null())
                    .col(ColumnDef::new(Alias::new("group_member3")).string().null())
                    .col(ColumnDef::new(Alias::new("group_member4")).string().null())
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .string()
                            .not_null()
                            .default("not_attended"),
                    )
                    .col(
                        ColumnDef::new(Alias::new("cancellation_reason"))
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(Alias::new("payment_id")).string().null())
                    .col(ColumnDef::new(Alias::new("payment_status")).string().null())
                    .col(ColumnDef::new(Alias::new("payment_method")).string().null())
                    .col(ColumnDef::new(Alias::new("amount")).big_integer().null())
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await?;

        // Capacity checks count by (arrival_date, shift_name).
        manager
            .create_index(
                Index::create()
                    .name("idx_session_reservations_slot")
                    .table(Alias::new("session_reservations"))
                    .col(Alias::new("arrival_date"))
                    .col(Alias::new("shift_name"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("session_reservations"))
                    .to_owned(),
            )
            .await
    }
}
