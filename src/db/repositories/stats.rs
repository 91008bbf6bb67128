use diesel::prelude::*;

use crate::db::models::stats::{
    NewReleaseEnvironment, NewReleaseProjectEnvironment, ReleaseProjectEnvironment, ReleaseStats,
};
use crate::schema::{release_environments, release_project_environments};

pub struct ReleaseStatsRepo;

impl ReleaseStatsRepo {
    /// Appends a marker that the release was seen in (project, environment).
    /// No dedup on write; readers collapse repeats.
    pub fn mark_seen(
        conn: &mut SqliteConnection,
        org: i64,
        project: i64,
        release: i64,
        environment: i64,
    ) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(release_environments::table)
            .values(&NewReleaseEnvironment {
                organization_id: org,
                project_id: project,
                release_id: release,
                environment_id: environment,
            })
            .execute(conn)
    }

    /// Appends one observation row. Merging happens at read time in
    /// [`ReleaseStatsRepo::fold`], keeping ingestion contention-free.
    pub fn record(
        conn: &mut SqliteConnection,
        observation: &NewReleaseProjectEnvironment,
    ) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(release_project_environments::table)
            .values(observation)
            .execute(conn)
    }

    /// Folds every observation row for the triple into a single summary:
    /// min(first_seen), max(last_seen), sum(new_issues_count). `None` when
    /// the release has no observations in that environment.
    pub fn fold(
        conn: &mut SqliteConnection,
        release: i64,
        project: i64,
        environment: i64,
    ) -> Result<Option<ReleaseStats>, diesel::result::Error> {
        use crate::schema::release_project_environments::dsl as rpe;

        let rows = release_project_environments::table
            .filter(rpe::release_id.eq(release))
            .filter(rpe::project_id.eq(project))
            .filter(rpe::environment_id.eq(environment))
            .load::<ReleaseProjectEnvironment>(conn)?;

        let mut rows = rows.into_iter();
        let Some(head) = rows.next() else {
            return Ok(None);
        };

        let folded = rows.fold(
            ReleaseStats {
                first_seen: head.first_seen,
                last_seen: head.last_seen,
                new_issues_count: head.new_issues_count,
            },
            |acc, row| ReleaseStats {
                first_seen: acc.first_seen.min(row.first_seen),
                last_seen: acc.last_seen.max(row.last_seen),
                new_issues_count: acc.new_issues_count + row.new_issues_count,
            },
        );
        Ok(Some(folded))
    }
}
