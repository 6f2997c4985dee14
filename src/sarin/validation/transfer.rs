//! Reassignment admission rules.
//!
//! Each rule is a pure function over the draft and the balances read at
//! validation time. Evaluating the same draft against the same balances
//! twice yields the same decision; nothing here mutates state.

use crate::sarin::domain::{
    ApprovedTransfer, BalanceChange, LotNumber, OperatorName, PacketQuantity, TransferDraft,
    TransferRejection, TransferRequest,
};

/// Validates the raw form fields of a reassignment draft.
///
/// Checks run in the order the reassignment form applies them: blank
/// required fields first, then the self-transfer guard, then the packet
/// count sign.
///
/// # Errors
///
/// Returns [`TransferRejection::MissingFields`] when the lot or either
/// operator field is blank, [`TransferRejection::SameOperator`] when both
/// operator fields name the same operator, or
/// [`TransferRejection::NonPositiveQuantity`] when the count is zero or
/// negative.
pub fn validate_draft(draft: &TransferDraft) -> Result<TransferRequest, TransferRejection> {
    if draft.lot().trim().is_empty()
        || draft.from_operator().trim().is_empty()
        || draft.to_operator().trim().is_empty()
    {
        return Err(TransferRejection::MissingFields);
    }

    let lot = LotNumber::new(draft.lot()).map_err(|_| TransferRejection::MissingFields)?;
    let from =
        OperatorName::new(draft.from_operator()).map_err(|_| TransferRejection::MissingFields)?;
    let to =
        OperatorName::new(draft.to_operator()).map_err(|_| TransferRejection::MissingFields)?;

    if from == to {
        return Err(TransferRejection::SameOperator);
    }

    let quantity = PacketQuantity::new(draft.quantity())
        .map_err(|_| TransferRejection::NonPositiveQuantity(draft.quantity()))?;

    Ok(TransferRequest {
        lot,
        from,
        to,
        quantity,
    })
}

/// Admits a validated request against balances read at validation time.
///
/// On success the returned [`ApprovedTransfer`] carries both operators'
/// before/after balances: the source is debited and the destination
/// credited by exactly the requested quantity, so the lot total is
/// conserved.
///
/// # Errors
///
/// Returns [`TransferRejection::InsufficientBalance`] with the true
/// available amount when the source holds fewer packets than requested.
pub fn authorize(
    request: TransferRequest,
    from_before: u64,
    to_before: u64,
) -> Result<ApprovedTransfer, TransferRejection> {
    let quantity = request.quantity().value();
    if quantity > from_before {
        return Err(TransferRejection::InsufficientBalance {
            operator: request.from().clone(),
            lot: request.lot().clone(),
            available: from_before,
        });
    }

    let source = BalanceChange {
        before: from_before,
        after: from_before - quantity,
    };
    let destination = BalanceChange {
        before: to_before,
        after: to_before + quantity,
    };
    Ok(ApprovedTransfer::new(request, source, destination))
}

/// Validates a draft and admits it against a synchronous balance lookup.
///
/// The lookup is consulted fresh for both operators; unknown
/// (operator, lot) pairs are expected to read as zero. This is the whole
/// admission decision in one pure call, suitable for previewing a
/// transfer before committing it.
///
/// # Errors
///
/// Returns the first applicable [`TransferRejection`], in form-field
/// order: `MissingFields`, `SameOperator`, `NonPositiveQuantity`, then
/// `InsufficientBalance`.
pub fn evaluate<B>(
    draft: &TransferDraft,
    balance_of: B,
) -> Result<ApprovedTransfer, TransferRejection>
where
    B: Fn(&OperatorName, &LotNumber) -> u64,
{
    let request = validate_draft(draft)?;
    let from_before = balance_of(request.from(), request.lot());
    let to_before = balance_of(request.to(), request.lot());
    authorize(request, from_before, to_before)
}
