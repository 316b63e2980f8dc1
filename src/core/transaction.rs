//! Expenditure transaction operations.
//!
//! Transactions are created as approved; the status enum supports pending and
//! rejected but no approval workflow exists - those values are reachable only
//! through direct edits. Salary transactions denormalize the staff name at
//! write time, so later staff renames do not retroactively rewrite history.

use crate::{
    core::{
        ledger::{SpendCategory, TransactionStatus},
        staff, validate,
    },
    entities::{transaction, Transaction},
    errors::{Error, Result},
    identity::Identity,
    live::{ChangeFeed, LedgerCollection},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, warn};

/// One row of the bulk-salary table. Unselected rows and rows whose amount
/// does not parse positive are skipped, not errors.
#[derive(Debug, Clone)]
pub struct SalarySelection {
    /// Referenced staff member
    pub staff_id: i64,
    /// Raw amount from the form
    pub amount: String,
    /// Description override; blank falls back to the monthly-salary default
    pub description: String,
    /// Whether the row was ticked
    pub selected: bool,
}

/// Fields accepted by a transaction edit. Absent fields are left unchanged.
/// `status` is the only path to pending/rejected in this system.
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    /// Replacement description
    pub description: Option<String>,
    /// Raw replacement amount, re-validated as positive before the write
    pub amount: Option<String>,
    /// Replacement staff reference; salaries only, re-resolves `staff_name`
    pub staff_id: Option<i64>,
    /// Replacement procurement bucket; procurement only
    pub procurement_type: Option<String>,
    /// Replacement procurement details; procurement only
    pub procurement_details: Option<String>,
    /// Direct status change (no approval workflow exists)
    pub status: Option<TransactionStatus>,
}

/// Creates a single procurement transaction after validating the amount and
/// both procurement fields. The description is derived as "{type}: {details}"
/// and the transaction is approved immediately.
pub async fn add_procurement_transaction(
    db: &DatabaseConnection,
    feed: &ChangeFeed,
    project_id: i64,
    raw_amount: &str,
    procurement_type: &str,
    procurement_details: &str,
    identity: &Identity,
) -> Result<transaction::Model> {
    let amount = validate::parse_amount(raw_amount)?;
    let procurement_type = validate::require("procurementType", procurement_type)?;
    let procurement_details = validate::require("procurementDetails", procurement_details)?;
    let stamp = identity.authorship();

    let model = transaction::ActiveModel {
        project_id: Set(project_id),
        amount: Set(amount),
        status: Set(TransactionStatus::Approved.as_str().to_string()),
        category: Set(SpendCategory::Procurement.as_str().to_string()),
        description: Set(format!("{procurement_type}: {procurement_details}")),
        procurement_type: Set(Some(procurement_type)),
        procurement_details: Set(Some(procurement_details)),
        created_at: Set(chrono::Utc::now()),
        created_by: Set(stamp.uid),
        created_by_name: Set(stamp.name),
        created_by_email: Set(stamp.email),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    feed.publish(LedgerCollection::Transactions, project_id);
    info!(
        transaction_id = created.id,
        project_id, amount, "procurement transaction added"
    );
    Ok(created)
}

/// Applies the selected rows of the bulk-salary table, creating one approved
/// salary transaction per valid row. Rows that are unselected, fail amount
/// parsing, or reference unknown staff are silently skipped. Inserts run as
/// independent concurrent writes - the group is not atomic and a partial
/// failure surfaces as a smaller success count, never a blanket error.
///
/// Returns the number of transactions actually created, which drives the
/// single user-facing confirmation message.
pub async fn bulk_apply_salaries(
    db: &DatabaseConnection,
    feed: &ChangeFeed,
    project_id: i64,
    selections: &[SalarySelection],
    identity: &Identity,
) -> Result<usize> {
    let stamp = identity.authorship();
    let now = chrono::Utc::now();

    let mut pending = Vec::new();
    for selection in selections.iter().filter(|s| s.selected) {
        let Ok(amount) = validate::parse_amount(&selection.amount) else {
            continue;
        };
        let Some(member) = staff::get_staff_member(db, selection.staff_id).await? else {
            continue;
        };

        let description = if selection.description.trim().is_empty() {
            format!("Monthly salary for {}", member.name)
        } else {
            selection.description.trim().to_string()
        };

        pending.push(transaction::ActiveModel {
            project_id: Set(project_id),
            amount: Set(amount),
            status: Set(TransactionStatus::Approved.as_str().to_string()),
            category: Set(SpendCategory::Salaries.as_str().to_string()),
            staff_id: Set(Some(member.id)),
            staff_name: Set(Some(member.name)),
            description: Set(description),
            created_at: Set(now),
            created_by: Set(stamp.uid.clone()),
            created_by_name: Set(stamp.name.clone()),
            created_by_email: Set(stamp.email.clone()),
            ..Default::default()
        });
    }

    let mut handles = Vec::with_capacity(pending.len());
    for model in pending {
        let db = db.clone();
        handles.push(tokio::spawn(async move { model.insert(&db).await }));
    }

    let mut created = 0usize;
    for handle in handles {
        match handle.await {
            Ok(Ok(_)) => created += 1,
            Ok(Err(error)) => warn!(%error, project_id, "salary transaction failed"),
            Err(error) => warn!(%error, project_id, "salary insert task panicked"),
        }
    }

    if created > 0 {
        feed.publish(LedgerCollection::Transactions, project_id);
    }
    info!(project_id, created, "bulk salary application finished");
    Ok(created)
}

/// Applies an edit to an existing transaction. The amount, if present, must
/// re-validate as positive. Changing a salary transaction's staff reference
/// re-resolves and overwrites the denormalized staff name at edit time; an
/// unresolvable staff id is rejected rather than written blank. Every edit
/// stamps `updated_at` and the editor.
pub async fn update_transaction(
    db: &DatabaseConnection,
    feed: &ChangeFeed,
    transaction_id: i64,
    update: TransactionUpdate,
    identity: &Identity,
) -> Result<transaction::Model> {
    let amount = update.amount.as_deref().map(validate::parse_amount).transpose()?;

    let existing = Transaction::find_by_id(transaction_id)
        .one(db)
        .await?
        .ok_or(Error::RecordNotFound {
            kind: "transaction",
            id: transaction_id,
        })?;
    let project_id = existing.project_id;
    let is_salary = existing.category == SpendCategory::Salaries.as_str();
    let stamp = identity.authorship();

    // Resolve the replacement staff name before mutating anything.
    let staff_change = if is_salary {
        match update.staff_id {
            Some(staff_id) => {
                let member = staff::get_staff_member(db, staff_id)
                    .await?
                    .ok_or(Error::StaffNotFound { id: staff_id })?;
                Some((member.id, member.name))
            }
            None => None,
        }
    } else {
        None
    };

    let mut active: transaction::ActiveModel = existing.into();
    if let Some(amount) = amount {
        active.amount = Set(amount);
    }
    if let Some(description) = update.description {
        active.description = Set(description);
    }
    if let Some((staff_id, staff_name)) = staff_change {
        active.staff_id = Set(Some(staff_id));
        active.staff_name = Set(Some(staff_name));
    }
    if !is_salary {
        if let Some(procurement_type) = update.procurement_type {
            active.procurement_type = Set(Some(procurement_type));
        }
        if let Some(procurement_details) = update.procurement_details {
            active.procurement_details = Set(Some(procurement_details));
        }
    }
    if let Some(status) = update.status {
        active.status = Set(status.as_str().to_string());
    }
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.updated_by = Set(Some(stamp.uid));
    active.updated_by_name = Set(Some(stamp.name));

    let updated = active.update(db).await?;
    feed.publish(LedgerCollection::Transactions, project_id);
    info!(transaction_id, project_id, "transaction updated");
    Ok(updated)
}

/// Deletes a transaction unconditionally. Intent confirmation is the
/// caller's responsibility.
pub async fn delete_transaction(
    db: &DatabaseConnection,
    feed: &ChangeFeed,
    transaction_id: i64,
) -> Result<()> {
    let existing = Transaction::find_by_id(transaction_id)
        .one(db)
        .await?
        .ok_or(Error::RecordNotFound {
            kind: "transaction",
            id: transaction_id,
        })?;
    let project_id = existing.project_id;

    Transaction::delete_by_id(transaction_id).exec(db).await?;
    feed.publish(LedgerCollection::Transactions, project_id);
    info!(transaction_id, project_id, "transaction deleted");
    Ok(())
}

/// Retrieves all transactions for a project, newest first.
pub async fn get_transactions_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<transaction::Model>> {
    Transaction::find()
        .filter(transaction::Column::ProjectId.eq(project_id))
        .order_by_desc(transaction::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
