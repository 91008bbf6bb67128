use diesel::prelude::*;

use crate::{
    db::models::stats::{NewReleaseProjectEnvironment, ReleaseStats},
    db::repositories::stats::ReleaseStatsRepo,
    error::AppError,
    services::context::RequestContext,
};

pub struct ReleaseStatsService;

impl ReleaseStatsService {
    /// Records one ingestion observation for (release, environment) and
    /// marks the release as seen there. Append-only; totals come out of
    /// [`ReleaseStatsService::fold`] at read time.
    pub fn record_observation(
        conn: &mut SqliteConnection,
        ctx: &RequestContext,
        release_id: i64,
        environment_id: i64,
        first_seen: chrono::NaiveDateTime,
        last_seen: chrono::NaiveDateTime,
        new_issues_count: i64,
    ) -> Result<(), AppError> {
        ReleaseStatsRepo::mark_seen(
            conn,
            ctx.organization_id,
            ctx.project_id,
            release_id,
            environment_id,
        )?;
        ReleaseStatsRepo::record(
            conn,
            &NewReleaseProjectEnvironment {
                release_id,
                project_id: ctx.project_id,
                environment_id,
                first_seen,
                last_seen,
                new_issues_count,
            },
        )?;
        tracing::debug!(
            release_id,
            environment_id,
            new_issues_count,
            "recorded release observation"
        );
        Ok(())
    }

    pub fn fold(
        conn: &mut SqliteConnection,
        ctx: &RequestContext,
        release_id: i64,
        environment_id: i64,
    ) -> Result<Option<ReleaseStats>, AppError> {
        let stats = ReleaseStatsRepo::fold(conn, release_id, ctx.project_id, environment_id)?;
        Ok(stats)
    }
}
