use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::commits)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Commit {
    pub id: i64,
    pub organization_id: i64,
    pub key: String,
    pub date_added: chrono::NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::commits)]
pub struct NewCommit {
    pub organization_id: i64,
    pub key: String,
    pub date_added: chrono::NaiveDateTime,
}

#[derive(Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::release_commits)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReleaseCommit {
    pub id: i64,
    pub organization_id: i64,
    pub release_id: i64,
    pub commit_id: i64,
    pub sort_order: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::release_commits)]
pub struct NewReleaseCommit {
    pub organization_id: i64,
    pub release_id: i64,
    pub commit_id: i64,
    pub sort_order: i64,
}

/// Commit reference supplied by the caller when creating a release.
/// Only the revision key matters here; author metadata is resolved by
/// the ingestion pipeline.
#[derive(Deserialize, Clone)]
pub struct CommitData {
    pub id: String,
}
