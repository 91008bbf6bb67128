#![allow(dead_code)]

use diesel::prelude::*;

use release_tracker::db::models::environment::Environment;
use release_tracker::db::models::organization::{
    NewOrganization, NewProject, Organization, Project,
};
use release_tracker::db::models::release::{NewRelease, Release};
use release_tracker::db::repositories::organizations::{OrganizationsRepo, ProjectsRepo};
use release_tracker::db::repositories::releases::{ReleaseProjectsRepo, ReleasesRepo};
use release_tracker::db::run_migrations;
use release_tracker::services::EnvironmentsService;
use release_tracker::services::context::RequestContext;

pub fn setup_conn() -> SqliteConnection {
    let mut conn =
        SqliteConnection::establish(":memory:").expect("failed to open in-memory database");
    run_migrations(&mut conn).expect("failed to run migrations");
    conn
}

pub fn dt(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_micro_opt(3, 8, 24, 880_386)
        .unwrap()
}

pub fn create_organization(conn: &mut SqliteConnection, name: &str) -> Organization {
    OrganizationsRepo::insert(
        conn,
        &NewOrganization {
            name: name.to_string(),
            date_added: chrono::Utc::now().naive_utc(),
        },
    )
    .unwrap()
}

pub fn create_project(conn: &mut SqliteConnection, org: &Organization, name: &str) -> Project {
    ProjectsRepo::insert(
        conn,
        &NewProject {
            organization_id: org.id,
            name: name.to_string(),
            date_added: chrono::Utc::now().naive_utc(),
        },
    )
    .unwrap()
}

pub fn ctx(project: &Project) -> RequestContext {
    RequestContext {
        organization_id: project.organization_id,
        project_id: project.id,
    }
}

/// Release fixture linked to the given project, bypassing the service
/// layer so tests control timestamps exactly.
pub fn create_release(
    conn: &mut SqliteConnection,
    project: &Project,
    version: &str,
    date_added: chrono::NaiveDateTime,
    date_released: Option<chrono::NaiveDateTime>,
) -> Release {
    let (release, _) = ReleasesRepo::get_or_create(
        conn,
        &NewRelease {
            organization_id: project.organization_id,
            version: version.to_string(),
            date_added,
            date_released,
            owner_id: None,
        },
    )
    .unwrap();
    ReleaseProjectsRepo::add(conn, release.id, project.id).unwrap();
    release
}

pub fn make_environment(
    conn: &mut SqliteConnection,
    project: &Project,
    name: &str,
) -> Environment {
    EnvironmentsService::get_or_create(conn, &ctx(project), name).unwrap()
}
