use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// Release models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::releases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Release {
    pub id: i64,
    pub organization_id: i64,
    pub version: String,
    pub date_added: chrono::NaiveDateTime,
    pub date_released: Option<chrono::NaiveDateTime>,
    pub owner_id: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::releases)]
pub struct NewRelease {
    pub organization_id: i64,
    pub version: String,
    pub date_added: chrono::NaiveDateTime,
    pub date_released: Option<chrono::NaiveDateTime>,
    pub owner_id: Option<i64>,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::release_projects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReleaseProject {
    pub id: i64,
    pub release_id: i64,
    pub project_id: i64,
    pub new_groups: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::release_projects)]
pub struct NewReleaseProject {
    pub release_id: i64,
    pub project_id: i64,
}

// Release API DTOs
#[derive(Deserialize, Clone)]
pub struct CreateReleaseRequest {
    pub version: String,
    pub date_added: Option<chrono::NaiveDateTime>,
    pub date_released: Option<chrono::NaiveDateTime>,
    pub owner_id: Option<i64>,
    pub commits: Option<Vec<super::commit::CommitData>>,
}

#[derive(Deserialize, Clone, Default)]
pub struct ReleaseListQuery {
    pub query: Option<String>,
    pub environment: Option<String>,
}

/// How a create call resolved; the boundary maps this to its
/// "created" vs "already exists" response codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStatus {
    Created,
    AlreadyExists,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
    pub version: String,
    pub date_added: chrono::NaiveDateTime,
    pub date_released: Option<chrono::NaiveDateTime>,
    pub new_groups: i64,
    pub first_event: Option<chrono::NaiveDateTime>,
    pub last_event: Option<chrono::NaiveDateTime>,
}
