use diesel::prelude::*;

use crate::db::models::commit::{Commit, NewCommit, NewReleaseCommit, ReleaseCommit};
use crate::schema::{commits, release_commits};

pub struct CommitsRepo;

impl CommitsRepo {
    /// Commits are keyed by (organization_id, key); re-ingesting a known
    /// revision resolves to the existing row.
    pub fn get_or_create(
        conn: &mut SqliteConnection,
        org: i64,
        commit_key: &str,
    ) -> Result<Commit, diesel::result::Error> {
        diesel::insert_into(commits::table)
            .values(&NewCommit {
                organization_id: org,
                key: commit_key.to_string(),
                date_added: chrono::Utc::now().naive_utc(),
            })
            .on_conflict((commits::organization_id, commits::key))
            .do_nothing()
            .execute(conn)?;

        commits::table
            .filter(commits::organization_id.eq(org))
            .filter(commits::key.eq(commit_key))
            .first::<Commit>(conn)
    }
}

pub struct ReleaseCommitsRepo;

impl ReleaseCommitsRepo {
    pub fn clear_for_release(
        conn: &mut SqliteConnection,
        release: i64,
    ) -> Result<usize, diesel::result::Error> {
        diesel::delete(release_commits::table.filter(release_commits::release_id.eq(release)))
            .execute(conn)
    }

    pub fn insert(
        conn: &mut SqliteConnection,
        new_release_commit: &NewReleaseCommit,
    ) -> Result<ReleaseCommit, diesel::result::Error> {
        diesel::insert_into(release_commits::table)
            .values(new_release_commit)
            .get_result(conn)
    }

    pub fn list_for_release(
        conn: &mut SqliteConnection,
        release: i64,
    ) -> Result<Vec<ReleaseCommit>, diesel::result::Error> {
        release_commits::table
            .filter(release_commits::release_id.eq(release))
            .order(release_commits::sort_order.asc())
            .load::<ReleaseCommit>(conn)
    }
}
