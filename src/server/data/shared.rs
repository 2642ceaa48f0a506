//! Query fragments shared by several repositories.
//!
//! Filters on related rows are expressed as `IN (subquery)` conditions rather than joins so
//! they compose with ordering joins and with the paginator's row count.

use sea_orm::{
    sea_query::{LikeExpr, SelectStatement},
    ColumnTrait, Condition, DbErr, EntityTrait, QueryFilter, QuerySelect, QueryTrait,
};

use crate::server::query::filter::DateWindow;

/// Substring match on a text column.
///
/// Name filters run this against the lowercased `name_search` columns with a fragment
/// normalised by `search_key`, since SQLite's `LIKE` only folds ASCII case. `%`, `_` and
/// `\` in the fragment match literally.
pub fn contains<T: ColumnTrait>(column: T, fragment: &str) -> Condition {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    Condition::all().add(column.like(LikeExpr::new(format!("%{}%", escaped)).escape('\\')))
}

/// Timestamp column inside the half-open window `[start, end)`.
pub fn within<T: ColumnTrait>(column: T, window: &DateWindow) -> Condition {
    Condition::all()
        .add(column.gte(window.start))
        .add(column.lt(window.end))
}

/// Ids of stations whose name contains `fragment`.
pub fn stations_named_like(fragment: &str) -> SelectStatement {
    entity::prelude::Station::find()
        .select_only()
        .column(entity::station::Column::Id)
        .filter(contains(entity::station::Column::NameSearch, fragment))
        .into_query()
}

/// Route conditions on the names of its source and destination stations.
pub fn route_endpoints(source: Option<&str>, destination: Option<&str>) -> Condition {
    let mut condition = Condition::all();

    if let Some(source) = source {
        condition = condition
            .add(entity::route::Column::SourceId.in_subquery(stations_named_like(source)));
    }
    if let Some(destination) = destination {
        condition = condition.add(
            entity::route::Column::DestinationId.in_subquery(stations_named_like(destination)),
        );
    }

    condition
}

/// Ids of routes matching [`route_endpoints`].
pub fn routes_between(source: Option<&str>, destination: Option<&str>) -> SelectStatement {
    entity::prelude::Route::find()
        .select_only()
        .column(entity::route::Column::Id)
        .filter(route_endpoints(source, destination))
        .into_query()
}

/// Error for a row whose foreign key target vanished between two reads.
pub fn missing_related(what: &str, id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("{} with id {} not found", what, id))
}
