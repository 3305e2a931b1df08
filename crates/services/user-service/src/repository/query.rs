//! Filter-to-predicate translation for user list queries.

use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, DbBackend};

use domain::UserFilter;

use super::entities::user::Column;

/// AND together the predicates of every present filter field.
///
/// An empty filter yields an empty condition, which matches every row.
pub fn filter_condition(filter: &UserFilter, backend: DbBackend) -> Condition {
    Condition::all()
        .add_option(
            filter
                .name_needle()
                .map(|needle| contains(Column::Name, needle, backend)),
        )
        .add_option(
            filter
                .email_needle()
                .map(|needle| contains(Column::Email, needle, backend)),
        )
        .add_option(filter.min_age.map(|min| Column::Age.gte(min)))
        .add_option(filter.max_age.map(|max| Column::Age.lte(max)))
}

/// Case-sensitive substring test.
///
/// LIKE is case-insensitive on SQLite and treats `%`/`_` in the needle as
/// wildcards, so the backend's position function is used instead.
fn contains(column: Column, needle: &str, backend: DbBackend) -> SimpleExpr {
    let position = match backend {
        DbBackend::Postgres => "strpos",
        _ => "instr",
    };

    Expr::expr(
        Func::cust(Alias::new(position))
            .arg(Expr::col(column))
            .arg(Expr::val(needle)),
    )
    .gt(0)
}
