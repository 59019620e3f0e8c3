//! Payment-gateway callback intake for loan extensions and fine settlements.
//!
//! The gateway retries callbacks and may deliver the same notification more
//! than once. The transaction row is keyed by the gateway order id, so a
//! replay is absorbed instead of double-applied, and the row is written
//! before the loan row is updated: once the money is recorded it stays
//! recorded even when the loan-side write has to go to manual
//! reconciliation.

use chrono::Utc;
use db::models::transaction;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::loan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    Paid,
    Pending,
    Failed,
}

impl PaymentOutcome {
    /// Collapses the gateway's transaction_status vocabulary onto the three
    /// states this system acts on. Anything unrecognized counts as failed.
    pub fn classify(transaction_status: &str) -> PaymentOutcome {
        match transaction_status {
            "capture" | "settlement" => PaymentOutcome::Paid,
            "pending" => PaymentOutcome::Pending,
            _ => PaymentOutcome::Failed,
        }
    }
}

/// The gateway's callback payload, plus the loan metadata we attached to the
/// order when it was created. `loan_due` rides along only on extension
/// orders; its absence marks a fine payment.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentNotification {
    pub order_id: String,
    pub transaction_status: String,
    pub payment_type: String,
    pub loan_id: Option<i64>,
    pub loan_due: Option<String>,
    pub amount: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PaymentReceipt {
    pub outcome: PaymentOutcome,
    pub duplicate: bool,
    pub transaction: Option<transaction::Model>,
}

/// Applies one gateway callback: records the settled payment, then runs the
/// loan-side effect it paid for (a due-date extension when `loan_due` is
/// present, otherwise a fine settlement).
///
/// Pending and failed notifications are acknowledged without writing
/// anything, and a callback naming an unknown loan is refused before the
/// payment row exists. Once that row is written, a loan-side write failure
/// propagates and the row stays.
pub async fn apply_notification(
    db: &DatabaseConnection,
    notification: PaymentNotification,
) -> Result<PaymentReceipt, ServiceError> {
    let outcome = PaymentOutcome::classify(&notification.transaction_status);
    if outcome != PaymentOutcome::Paid {
        return Ok(PaymentReceipt {
            outcome,
            duplicate: false,
            transaction: None,
        });
    }

    if let Some(existing) =
        transaction::Model::find_by_payment_id(db, &notification.order_id).await?
    {
        log::info!("payment {} already recorded, ignoring replay", existing.payment_id);
        return Ok(PaymentReceipt {
            outcome,
            duplicate: true,
            transaction: Some(existing),
        });
    }

    let loan_id = notification
        .loan_id
        .ok_or_else(|| ServiceError::validation("Loan reference is missing from the payment"))?;
    loan::get_loan(db, loan_id).await?;

    let recorded = transaction::ActiveModel {
        loan_id: Set(loan_id),
        payment_id: Set(notification.order_id),
        payment_status: Set(notification.transaction_status),
        payment_method: Set(notification.payment_type),
        amount: Set(notification.amount.unwrap_or(0)),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    match notification.loan_due {
        Some(new_due) => loan::extend_loan(db, loan_id, &new_due).await?,
        None => loan::settle_fine(db, loan_id).await?,
    };

    Ok(PaymentReceipt {
        outcome,
        duplicate: false,
        transaction: Some(recorded),
    })
}
