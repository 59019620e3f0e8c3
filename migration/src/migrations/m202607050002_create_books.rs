use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202607050002_create_books"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // books
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("books"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("book_title")).string().not_null())
                    .col(ColumnDef::new(Alias::new("author")).string().null())
                    .col(
                        ColumnDef::new(Alias::new("category_id"))
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("stock"))
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Alias::new("is_deleted"))
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_category")
                            .from(Alias::new("books"), Alias::new("category_id"))
                            .to(Alias::new("categories"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // book_copies
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("book_copies"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("book_id"))
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("copy_number"))
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("condition"))
                            .string()
                            .not_null()
                            .default("good"),
                    )
                    .col(ColumnDef::new(Alias::new("comment")).string().null())
                    .col(
                        ColumnDef::new(Alias::new("is_retired"))
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_copies_book")
                            .from(Alias::new("book_copies"), Alias::new("book_id"))
                            .to(Alias::new("books"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_book_copies_book_copy")
                    .table(Alias::new("book_copies"))
                    .col(Alias::new("book_id"))
                    .col(Alias::new("copy_number"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        // inventory_logs
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("inventory_logs"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("mode")).string().not_null())
                    .col(ColumnDef::new(Alias::new("item_name")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("stock_before"))
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("stock_after"))
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("comment")).string().null())
                    .col(ColumnDef::new(Alias::new("handled_by")).string().null())
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("inventory_logs")).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("book_copies")).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("books")).to_owned())
            .await
    }
}
