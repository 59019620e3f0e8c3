//! Loan lifecycle: creation, the overdue sweep, due-date extension and fine
//! settlement.
//!
//! Extension and fine settlement run after a payment has already settled, so
//! both retry the loan write and give up into a reconciliation error rather
//! than touching the recorded payment.

use std::time::Duration;

use chrono::{Days, NaiveDate, Utc};
use db::models::loan::{self, LoanStatus};
use db::models::{book, transaction};
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use serde::Deserialize;
use validator::Validate;

use crate::error::ServiceError;
use crate::retry::{self, RetryPolicy};

/// Loans run for one week before falling due.
pub const LOAN_PERIOD_DAYS: u64 = 7;

pub const EXTEND_RETRY: RetryPolicy = RetryPolicy {
    max_attempts: 5,
    delay: Duration::from_millis(1000),
};

pub const FINE_RETRY: RetryPolicy = RetryPolicy {
    max_attempts: 3,
    delay: Duration::from_millis(500),
};

static DUE_DATE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewLoan {
    pub book_id1: i64,
    pub book_id2: Option<i64>,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    pub payment_id: Option<String>,
    pub payment_status: Option<String>,
    pub payment_method: Option<String>,
    pub amount: Option<i64>,
}

/// Opens a loan for one or two titles starting `today`. Titles are
/// denormalized onto the row so the history survives catalog edits. When the
/// loan was paid for at checkout the settled payment gets its own transaction
/// row, and a replayed checkout callback with the same payment_id returns the
/// loan already created for it.
pub async fn create_loan(
    db: &DatabaseConnection,
    input: NewLoan,
    today: NaiveDate,
) -> Result<loan::Model, ServiceError> {
    input
        .validate()
        .map_err(|errs| ServiceError::Validation(common::format_validation_errors(&errs)))?;

    if let Some(payment_id) = input.payment_id.as_deref() {
        if let Some(existing) = loan::Model::find_by_payment_id(db, payment_id).await? {
            return Ok(existing);
        }
    }

    let first = book::Model::find_live(db, input.book_id1)
        .await?
        .ok_or_else(|| ServiceError::not_found("Book not found"))?;

    let second = match input.book_id2 {
        Some(id) => Some(
            book::Model::find_live(db, id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Book not found"))?,
        ),
        None => None,
    };

    let loan_due = today
        .checked_add_days(Days::new(LOAN_PERIOD_DAYS))
        .ok_or_else(|| ServiceError::validation("Loan start date is out of range"))?;

    let created = loan::ActiveModel {
        book_id1: Set(first.id),
        book_id2: Set(second.as_ref().map(|b| b.id)),
        book_title1: Set(first.book_title),
        book_title2: Set(second.map(|b| b.book_title)),
        full_name: Set(input.full_name),
        email: Set(input.email),
        phone_number: Set(input.phone_number),
        loan_start: Set(today),
        loan_due: Set(loan_due),
        status: Set(LoanStatus::OnGoing),
        fine: Set(false),
        extend_count: Set(0),
        payment_id: Set(input.payment_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    if let Some(payment_id) = created.payment_id.clone() {
        transaction::ActiveModel {
            loan_id: Set(created.id),
            payment_id: Set(payment_id),
            payment_status: Set(input.payment_status.unwrap_or_default()),
            payment_method: Set(input.payment_method.unwrap_or_default()),
            amount: Set(input.amount.unwrap_or(0)),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(created)
}

/// Flips every ongoing loan whose due date has passed to overdue and returns
/// how many rows moved. Level-triggered: a second run on the same day finds
/// nothing left to flip. The fine flag is not touched here.
pub async fn sweep_overdue(db: &DatabaseConnection, today: NaiveDate) -> Result<u64, ServiceError> {
    let candidates = loan::Model::find_overdue_candidates(db, today).await?;
    let flipped = candidates.len() as u64;

    for candidate in candidates {
        let id = candidate.id;
        let mut active: loan::ActiveModel = candidate.into();
        active.status = Set(LoanStatus::OverDue);
        active.update(db).await?;
        log::info!("loan {} marked overdue", id);
    }

    Ok(flipped)
}

/// Moves a loan's due date to `new_due` (a `YYYY-MM-DD` string straight from
/// the payment gateway) and resets the loan to ongoing.
///
/// Input checks run before any write so a bad date never burns retries. The
/// write itself is a pure overwrite: replaying the same extension leaves the
/// loan exactly as the first attempt did, and `extend_count` only moves when
/// the due date does.
pub async fn extend_loan(
    db: &DatabaseConnection,
    loan_id: i64,
    new_due: &str,
) -> Result<loan::Model, ServiceError> {
    if !DUE_DATE_FORMAT.is_match(new_due) {
        return Err(ServiceError::validation(
            "Invalid date format. Expected YYYY-MM-DD",
        ));
    }
    let new_due = NaiveDate::parse_from_str(new_due, "%Y-%m-%d")
        .map_err(|_| ServiceError::validation("Invalid date format. Expected YYYY-MM-DD"))?;

    let current = loan::Entity::find_by_id(loan_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Loan not found"))?;

    let extend_count = if current.loan_due == new_due {
        current.extend_count
    } else {
        current.extend_count + 1
    };

    let updated = retry::run(EXTEND_RETRY, || {
        let base = current.clone();
        async move {
            let mut active: loan::ActiveModel = base.into();
            active.loan_due = Set(new_due);
            active.status = Set(LoanStatus::OnGoing);
            active.extend_count = Set(extend_count);
            active.update(db).await
        }
    })
    .await
    .map_err(|err| {
        ServiceError::Reconciliation(format!(
            "Payment recorded but loan {loan_id} was not extended: {err}"
        ))
    })?;

    Ok(updated)
}

/// Clears the fine flag after a settled fine payment. Status and due date are
/// left alone: paying a fine does not return the books.
pub async fn settle_fine(db: &DatabaseConnection, loan_id: i64) -> Result<loan::Model, ServiceError> {
    let current = loan::Entity::find_by_id(loan_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Loan not found"))?;

    let updated = retry::run(FINE_RETRY, || {
        let base = current.clone();
        async move {
            let mut active: loan::ActiveModel = base.into();
            active.fine = Set(false);
            active.update(db).await
        }
    })
    .await
    .map_err(|err| {
        ServiceError::Reconciliation(format!(
            "Payment recorded but the fine on loan {loan_id} was not cleared: {err}"
        ))
    })?;

    Ok(updated)
}

/// Manual fine toggle for staff.
pub async fn set_fine(
    db: &DatabaseConnection,
    loan_id: i64,
    fine: bool,
) -> Result<loan::Model, ServiceError> {
    let current = loan::Entity::find_by_id(loan_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Loan not found"))?;

    let mut active: loan::ActiveModel = current.into();
    active.fine = Set(fine);
    Ok(active.update(db).await?)
}

pub async fn list_loans(db: &DatabaseConnection) -> Result<Vec<loan::Model>, ServiceError> {
    Ok(loan::Entity::find()
        .order_by_desc(loan::Column::CreatedAt)
        .all(db)
        .await?)
}

pub async fn get_loan(db: &DatabaseConnection, loan_id: i64) -> Result<loan::Model, ServiceError> {
    loan::Entity::find_by_id(loan_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Loan not found"))
}

pub async fn loan_transactions(
    db: &DatabaseConnection,
    loan_id: i64,
) -> Result<Vec<transaction::Model>, ServiceError> {
    get_loan(db, loan_id).await?;
    Ok(transaction::Model::find_for_loan(db, loan_id).await?)
}
