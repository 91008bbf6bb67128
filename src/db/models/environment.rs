use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::environments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Environment {
    pub id: i64,
    pub organization_id: i64,
    pub project_id: i64,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::environments)]
pub struct NewEnvironment {
    pub organization_id: i64,
    pub project_id: i64,
    pub name: String,
}

#[derive(Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::environment_projects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EnvironmentProject {
    pub id: i64,
    pub environment_id: i64,
    pub project_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::environment_projects)]
pub struct NewEnvironmentProject {
    pub environment_id: i64,
    pub project_id: i64,
}
