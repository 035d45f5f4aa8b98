//! Soft-delete read filtering.

use crate::fields::ResolvedFields;
use crate::query::{Condition, Query, QueryKind};

/// Inject the soft-delete exclusion predicate (`deleted = 0`) into a read
/// request's condition set.
///
/// The predicate is skipped when:
/// - the request is not a select-class read,
/// - injection already ran for this request instance, or
/// - the request opted out via `with_deleted`.
///
/// The injected column is qualified with the request's source alias so it
/// stays unambiguous in joined queries. Caller-supplied conditions are left
/// untouched; the predicate only ANDs onto them.
pub fn apply(query: &mut Query, fields: &ResolvedFields) {
    if query.kind() != QueryKind::Select {
        return;
    }
    if query.soft_delete_applied() {
        return;
    }
    if query.options().with_deleted {
        return;
    }

    let column = format!("{}.{}", query.source(), fields.deleted_field());
    query.push_condition(Condition::eq(column, 0));
    query.mark_soft_delete_applied();
}
