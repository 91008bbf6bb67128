use diesel::prelude::*;

use crate::db::models::release::{NewRelease, NewReleaseProject, Release, ReleaseProject};
use crate::schema::{release_environments, release_projects, releases};

pub struct ReleasesRepo;

impl ReleasesRepo {
    pub fn find_by_version(
        conn: &mut SqliteConnection,
        org: i64,
        release_version: &str,
    ) -> Result<Option<Release>, diesel::result::Error> {
        releases::table
            .filter(releases::organization_id.eq(org))
            .filter(releases::version.eq(release_version))
            .first::<Release>(conn)
            .optional()
    }

    /// Optimistic insert guarded by the (organization_id, version) unique
    /// constraint. A concurrent creator losing the race falls through to
    /// the re-fetch, so both callers observe the same row.
    pub fn get_or_create(
        conn: &mut SqliteConnection,
        new_release: &NewRelease,
    ) -> Result<(Release, bool), diesel::result::Error> {
        let inserted = diesel::insert_into(releases::table)
            .values(new_release)
            .on_conflict((releases::organization_id, releases::version))
            .do_nothing()
            .execute(conn)?;

        let release = releases::table
            .filter(releases::organization_id.eq(new_release.organization_id))
            .filter(releases::version.eq(&new_release.version))
            .first::<Release>(conn)?;

        Ok((release, inserted > 0))
    }

    /// Releases linked to the project, newest first. `version_prefix`
    /// narrows by a case-insensitive starts-with match; `environment_id`
    /// narrows to releases seen in that environment for this project.
    pub fn list_for_project(
        conn: &mut SqliteConnection,
        project_id: i64,
        version_prefix: Option<&str>,
        environment_id: Option<i64>,
    ) -> Result<Vec<Release>, diesel::result::Error> {
        let mut query = release_projects::table
            .inner_join(releases::table)
            .filter(release_projects::project_id.eq(project_id))
            .select(Release::as_select())
            .into_boxed();

        if let Some(prefix) = version_prefix {
            // The prefix is literal text; LIKE metacharacters in it must
            // not act as wildcards.
            let escaped = prefix
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            query = query.filter(releases::version.like(format!("{}%", escaped)).escape('\\'));
        }

        if let Some(env_id) = environment_id {
            let seen = release_environments::table
                .filter(release_environments::project_id.eq(project_id))
                .filter(release_environments::environment_id.eq(env_id))
                .select(release_environments::release_id);
            query = query.filter(releases::id.eq_any(seen));
        }

        query
            .order((releases::date_added.desc(), releases::id.desc()))
            .load::<Release>(conn)
    }
}

pub struct ReleaseProjectsRepo;

impl ReleaseProjectsRepo {
    /// Idempotent join insert; returns whether the association was new.
    pub fn add(
        conn: &mut SqliteConnection,
        release: i64,
        project: i64,
    ) -> Result<bool, diesel::result::Error> {
        let inserted = diesel::insert_into(release_projects::table)
            .values(&NewReleaseProject {
                release_id: release,
                project_id: project,
            })
            .on_conflict((release_projects::release_id, release_projects::project_id))
            .do_nothing()
            .execute(conn)?;
        Ok(inserted > 0)
    }

    pub fn find(
        conn: &mut SqliteConnection,
        release: i64,
        project: i64,
    ) -> Result<Option<ReleaseProject>, diesel::result::Error> {
        release_projects::table
            .filter(release_projects::release_id.eq(release))
            .filter(release_projects::project_id.eq(project))
            .first::<ReleaseProject>(conn)
            .optional()
    }

    pub fn set_new_groups(
        conn: &mut SqliteConnection,
        release: i64,
        project: i64,
        count: i64,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(
            release_projects::table
                .filter(release_projects::release_id.eq(release))
                .filter(release_projects::project_id.eq(project)),
        )
        .set(release_projects::new_groups.eq(count))
        .execute(conn)
    }

    pub fn new_groups(
        conn: &mut SqliteConnection,
        release: i64,
        project: i64,
    ) -> Result<i64, diesel::result::Error> {
        release_projects::table
            .filter(release_projects::release_id.eq(release))
            .filter(release_projects::project_id.eq(project))
            .select(release_projects::new_groups)
            .first::<i64>(conn)
            .optional()
            .map(|v| v.unwrap_or(0))
    }
}
