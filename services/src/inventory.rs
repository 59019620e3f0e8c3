//! Catalog and physical-stock management.
//!
//! `books.stock` and `categories.number_of_items` are cached counts. Every
//! mutation recomputes them from the live rows inside the same transaction
//! and appends a movement row to the journal, so the caches and the audit
//! trail can never drift from each other.

use chrono::Utc;
use db::models::{book, book_copy, category, inventory_log};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ServiceError;

async fn active_copy_count<C: ConnectionTrait>(conn: &C, book_id: i64) -> Result<i32, sea_orm::DbErr> {
    let count = book_copy::Entity::find()
        .filter(book_copy::Column::BookId.eq(book_id))
        .filter(book_copy::Column::IsRetired.eq(false))
        .count(conn)
        .await?;
    Ok(count as i32)
}

async fn live_title_count<C: ConnectionTrait>(conn: &C, category_id: i64) -> Result<i32, sea_orm::DbErr> {
    let count = book::Entity::find()
        .filter(book::Column::CategoryId.eq(category_id))
        .filter(book::Column::IsDeleted.eq(false))
        .count(conn)
        .await?;
    Ok(count as i32)
}

async fn journal<C: ConnectionTrait>(
    conn: &C,
    mode: &str,
    item_name: &str,
    stock_before: i32,
    stock_after: i32,
    comment: Option<String>,
    handled_by: Option<String>,
) -> Result<(), sea_orm::DbErr> {
    inventory_log::ActiveModel {
        mode: Set(mode.to_string()),
        item_name: Set(item_name.to_string()),
        stock_before: Set(stock_before),
        stock_after: Set(stock_after),
        comment: Set(comment),
        handled_by: Set(handled_by),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    Ok(())
}

pub async fn create_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<category::Model, ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::validation("Category name is required"));
    }
    if category::Model::find_by_name(db, name).await?.is_some() {
        return Err(ServiceError::validation("Category already exists"));
    }

    let created = category::ActiveModel {
        category_name: Set(name.to_string()),
        number_of_items: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(created)
}

pub async fn list_categories(
    db: &DatabaseConnection,
) -> Result<Vec<category::Model>, ServiceError> {
    Ok(category::Entity::find().all(db).await?)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Book title is required"))]
    pub book_title: String,
    pub author: Option<String>,
    pub category_id: i64,
    #[validate(range(min = 1, message = "At least one copy is required"))]
    pub copies: i32,
    pub handled_by: Option<String>,
}

/// Adds a title together with its initial physical copies, numbered from 1.
pub async fn create_book(
    db: &DatabaseConnection,
    input: NewBook,
) -> Result<book::Model, ServiceError> {
    input
        .validate()
        .map_err(|errs| ServiceError::Validation(common::format_validation_errors(&errs)))?;

    let txn = db.begin().await?;

    let cat = category::Entity::find_by_id(input.category_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::validation("Invalid category selected"))?;

    let created = book::ActiveModel {
        book_title: Set(input.book_title),
        author: Set(input.author),
        category_id: Set(cat.id),
        stock: Set(input.copies),
        is_deleted: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for copy_number in 1..=input.copies {
        book_copy::ActiveModel {
            book_id: Set(created.id),
            copy_number: Set(copy_number),
            condition: Set("good".to_string()),
            comment: Set(None),
            is_retired: Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    let titles = live_title_count(&txn, cat.id).await?;
    let mut cat_active: category::ActiveModel = cat.into();
    cat_active.number_of_items = Set(titles);
    cat_active.update(&txn).await?;

    journal(
        &txn,
        "add",
        &created.book_title,
        0,
        created.stock,
        None,
        input.handled_by,
    )
    .await?;

    txn.commit().await?;
    Ok(created)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCopy {
    pub book_id: i64,
    #[validate(length(min = 1, message = "Condition is required"))]
    pub condition: String,
    pub comment: Option<String>,
    pub handled_by: Option<String>,
}

/// Adds one physical copy to an existing title. Copy numbers keep growing
/// past retired units so a number is never reused.
pub async fn add_copy(
    db: &DatabaseConnection,
    input: NewCopy,
) -> Result<book_copy::Model, ServiceError> {
    input
        .validate()
        .map_err(|errs| ServiceError::Validation(common::format_validation_errors(&errs)))?;

    let txn = db.begin().await?;

    let target = book::Entity::find_by_id(input.book_id)
        .filter(book::Column::IsDeleted.eq(false))
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Book not found"))?;

    let existing = book_copy::Entity::find()
        .filter(book_copy::Column::BookId.eq(target.id))
        .all(&txn)
        .await?;
    let copy_number = existing.iter().map(|c| c.copy_number).max().unwrap_or(0) + 1;

    let created = book_copy::ActiveModel {
        book_id: Set(target.id),
        copy_number: Set(copy_number),
        condition: Set(input.condition),
        comment: Set(input.comment),
        is_retired: Set(false),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let stock = active_copy_count(&txn, target.id).await?;
    let stock_before = target.stock;
    let title = target.book_title.clone();
    let mut book_active: book::ActiveModel = target.into();
    book_active.stock = Set(stock);
    book_active.update(&txn).await?;

    journal(&txn, "add", &title, stock_before, stock, None, input.handled_by).await?;

    txn.commit().await?;
    Ok(created)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RetireCopy {
    pub copy_id: i64,
    #[validate(length(min = 1, message = "Condition is required"))]
    pub condition: String,
    pub comment: Option<String>,
    pub handled_by: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RetireOutcome {
    pub copy: book_copy::Model,
    pub book: book::Model,
}

/// Takes a damaged or lost copy out of circulation and restates the title's
/// stock, all in one transaction so the journal row and the cached count
/// always agree.
pub async fn retire_copy(
    db: &DatabaseConnection,
    input: RetireCopy,
) -> Result<RetireOutcome, ServiceError> {
    input
        .validate()
        .map_err(|errs| ServiceError::Validation(common::format_validation_errors(&errs)))?;

    let txn = db.begin().await?;

    let copy = book_copy::Entity::find_by_id(input.copy_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Copy not found"))?;
    if copy.is_retired {
        return Err(ServiceError::validation("Copy is already retired"));
    }

    let owner = book::Entity::find_by_id(copy.book_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Book not found"))?;

    let mut copy_active: book_copy::ActiveModel = copy.into();
    copy_active.is_retired = Set(true);
    copy_active.condition = Set(input.condition);
    copy_active.comment = Set(input.comment.clone());
    let retired = copy_active.update(&txn).await?;

    let stock = active_copy_count(&txn, owner.id).await?;
    let stock_before = owner.stock;
    let mut book_active: book::ActiveModel = owner.into();
    book_active.stock = Set(stock);
    let restated = book_active.update(&txn).await?;

    journal(
        &txn,
        "retire",
        &restated.book_title,
        stock_before,
        stock,
        input.comment,
        input.handled_by,
    )
    .await?;

    txn.commit().await?;
    Ok(RetireOutcome {
        copy: retired,
        book: restated,
    })
}

/// Removes a title from the catalog. Its copies are retired with it and the
/// row survives soft-deleted for the loan history.
pub async fn delete_book(
    db: &DatabaseConnection,
    book_id: i64,
    handled_by: Option<String>,
) -> Result<(), ServiceError> {
    let txn = db.begin().await?;

    let target = book::Entity::find_by_id(book_id)
        .filter(book::Column::IsDeleted.eq(false))
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Book not found"))?;

    let copies = book_copy::Entity::find()
        .filter(book_copy::Column::BookId.eq(target.id))
        .filter(book_copy::Column::IsRetired.eq(false))
        .all(&txn)
        .await?;
    for copy in copies {
        let mut active: book_copy::ActiveModel = copy.into();
        active.is_retired = Set(true);
        active.update(&txn).await?;
    }

    let stock_before = target.stock;
    let title = target.book_title.clone();
    let category_id = target.category_id;
    let mut book_active: book::ActiveModel = target.into();
    book_active.is_deleted = Set(true);
    book_active.stock = Set(0);
    book_active.update(&txn).await?;

    let titles = live_title_count(&txn, category_id).await?;
    let cat = category::Entity::find_by_id(category_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Category not found"))?;
    let mut cat_active: category::ActiveModel = cat.into();
    cat_active.number_of_items = Set(titles);
    cat_active.update(&txn).await?;

    journal(&txn, "delete", &title, stock_before, 0, None, handled_by).await?;

    txn.commit().await?;
    Ok(())
}

pub async fn list_books(db: &DatabaseConnection) -> Result<Vec<book::Model>, ServiceError> {
    Ok(book::Model::find_all_live(db).await?)
}

pub async fn get_book(db: &DatabaseConnection, id: i64) -> Result<book::Model, ServiceError> {
    book::Model::find_live(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Book not found"))
}

pub async fn list_copies(
    db: &DatabaseConnection,
    book_id: i64,
) -> Result<Vec<book_copy::Model>, ServiceError> {
    get_book(db, book_id).await?;
    Ok(book_copy::Model::find_for_book(db, book_id).await?)
}

pub async fn list_movements(
    db: &DatabaseConnection,
) -> Result<Vec<inventory_log::Model>, ServiceError> {
    Ok(inventory_log::Entity::find()
        .order_by_desc(inventory_log::Column::CreatedAt)
        .all(db)
        .await?)
}
