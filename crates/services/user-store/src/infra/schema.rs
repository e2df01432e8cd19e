//! Table definitions issued at startup.

use sea_orm::sea_query::{ColumnDef, Expr, Table, TableCreateStatement};

use crate::repository::entities::user;

/// `CREATE TABLE IF NOT EXISTS users`, portable across MySQL, PostgreSQL and SQLite.
pub fn users_table() -> TableCreateStatement {
    Table::create()
        .table(user::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(user::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(user::Column::Name).string().not_null())
        .col(ColumnDef::new(user::Column::Email).string().not_null())
        .col(
            ColumnDef::new(user::Column::DateAdded)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}
