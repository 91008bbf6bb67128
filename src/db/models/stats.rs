use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Marker that a release has been observed in a (project, environment)
/// pair. Ingestion may write the same triple more than once; readers
/// collapse repeats.
#[derive(Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::release_environments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReleaseEnvironment {
    pub id: i64,
    pub organization_id: i64,
    pub project_id: i64,
    pub release_id: i64,
    pub environment_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::release_environments)]
pub struct NewReleaseEnvironment {
    pub organization_id: i64,
    pub project_id: i64,
    pub release_id: i64,
    pub environment_id: i64,
}

/// One row of the append-only observation log. Rows sharing a
/// (release, project, environment) triple are folded on read.
#[derive(Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::release_project_environments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReleaseProjectEnvironment {
    pub id: i64,
    pub release_id: i64,
    pub project_id: i64,
    pub environment_id: i64,
    pub first_seen: chrono::NaiveDateTime,
    pub last_seen: chrono::NaiveDateTime,
    pub new_issues_count: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::release_project_environments)]
pub struct NewReleaseProjectEnvironment {
    pub release_id: i64,
    pub project_id: i64,
    pub environment_id: i64,
    pub first_seen: chrono::NaiveDateTime,
    pub last_seen: chrono::NaiveDateTime,
    pub new_issues_count: i64,
}

/// Folded view of the observation log for one triple:
/// min(first_seen), max(last_seen), sum(new_issues_count).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReleaseStats {
    pub first_seen: chrono::NaiveDateTime,
    pub last_seen: chrono::NaiveDateTime,
    pub new_issues_count: i64,
}
