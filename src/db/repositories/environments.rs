use diesel::prelude::*;

use crate::db::models::environment::{Environment, NewEnvironment, NewEnvironmentProject};
use crate::schema::{environment_projects, environments};

pub struct EnvironmentsRepo;

impl EnvironmentsRepo {
    /// Idempotent on (project_id, name); a concurrent creator resolves to
    /// the same row via the re-fetch.
    pub fn get_or_create(
        conn: &mut SqliteConnection,
        project: i64,
        org: i64,
        env_name: &str,
    ) -> Result<Environment, diesel::result::Error> {
        diesel::insert_into(environments::table)
            .values(&NewEnvironment {
                organization_id: org,
                project_id: project,
                name: env_name.to_string(),
            })
            .on_conflict((environments::project_id, environments::name))
            .do_nothing()
            .execute(conn)?;

        environments::table
            .filter(environments::project_id.eq(project))
            .filter(environments::name.eq(env_name))
            .first::<Environment>(conn)
    }

    pub fn find_by_name(
        conn: &mut SqliteConnection,
        project: i64,
        env_name: &str,
    ) -> Result<Option<Environment>, diesel::result::Error> {
        environments::table
            .filter(environments::project_id.eq(project))
            .filter(environments::name.eq(env_name))
            .first::<Environment>(conn)
            .optional()
    }

    pub fn add_project(
        conn: &mut SqliteConnection,
        environment: i64,
        project: i64,
    ) -> Result<bool, diesel::result::Error> {
        let inserted = diesel::insert_into(environment_projects::table)
            .values(&NewEnvironmentProject {
                environment_id: environment,
                project_id: project,
            })
            .on_conflict((
                environment_projects::environment_id,
                environment_projects::project_id,
            ))
            .do_nothing()
            .execute(conn)?;
        Ok(inserted > 0)
    }
}
