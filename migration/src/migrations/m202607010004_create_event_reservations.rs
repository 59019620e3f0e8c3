use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202607010004_create_event_reservations"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("event_reservations"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("event_id"))
                            .big_integer()
                            .not_null(),
                    )
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
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_res_event")
                            .from(Alias::new("event_reservations"), Alias::new("event_id"))
                            .to(Alias::new("events"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_reservations_event")
                    .table(Alias::new("event_reservations"))
                    .col(Alias::new("event_id"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("event_reservations"))
                    .to_owned(),
            )
            .await
    }
}
