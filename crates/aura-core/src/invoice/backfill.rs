//! Derivation of missing monetary fields.

use tracing::trace;

use crate::models::invoice::InvoiceDraft;

/// Fill in `amount_without_gst` as `total_amount - gst_amount` when it is
/// absent and both operands are present.
///
/// The difference is exact and may be negative. An already present net
/// amount is never touched, which makes the operation idempotent.
pub fn backfill_amounts(mut draft: InvoiceDraft) -> InvoiceDraft {
    if draft.amount_without_gst.is_some() {
        return draft;
    }

    if let (Some(gst), Some(total)) = (draft.gst_amount, draft.total_amount) {
        draft.amount_without_gst = total.checked_sub(gst);
        trace!("Backfilled net amount: {:?}", draft.amount_without_gst);
    }

    draft
}
