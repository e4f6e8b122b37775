//! Users repository for replica-assignment reads.
//!
//! # Security
//!
//! - All queries use parameterized statements (SQL injection safe)
//! - Wallet addresses are not logged

use crate::errors::DiscoveryError;
use crate::observability::metrics;
use crate::replica::ReplicaSet;
use serde::Serialize;
use sqlx::PgPool;
use std::time::Instant;
use tracing::instrument;

/// A user's replica assignment as returned by the read path.
#[derive(Debug, Clone, Serialize)]
pub struct UserReplica {
    /// User ID.
    pub user_id: i32,
    /// User wallet address, when set.
    pub wallet: Option<String>,
    /// Parsed replica assignment, primary first.
    pub replica_set: ReplicaSet,
}

/// Repository for user replica-assignment reads.
pub struct UsersRepository;

impl UsersRepository {
    /// Get all current creator users whose primary replica is `endpoint` and
    /// who also have a configured secondary replica.
    ///
    /// The stored endpoint list is split inside SQL; its first element is the
    /// user's primary. A secondary counts as configured only when it is
    /// present and non-blank, so a trailing delimiter or a whitespace-only
    /// segment does not qualify. Results are ordered by `user_id` ascending.
    ///
    /// The endpoint string is matched verbatim and never validated.
    ///
    /// # Arguments
    ///
    /// * `pool` - Read-replica connection pool
    /// * `endpoint` - Content-node endpoint URL
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::Database` on database failures.
    #[instrument(skip_all, fields(endpoint = %endpoint))]
    pub async fn get_users_by_primary_node(
        pool: &PgPool,
        endpoint: &str,
    ) -> Result<Vec<UserReplica>, DiscoveryError> {
        let start = Instant::now();

        let query_result: Result<Vec<UserReplicaRow>, sqlx::Error> = sqlx::query_as(
            r#"
            SELECT
                user_id,
                wallet,
                content_node_endpoint
            FROM (
                SELECT
                    user_id,
                    wallet,
                    content_node_endpoint,
                    string_to_array(content_node_endpoint, ',') AS replica_endpoints
                FROM users
                WHERE is_creator IS TRUE
                  AND is_current IS TRUE
            ) AS u
            WHERE u.replica_endpoints[1] = $1
              AND u.replica_endpoints[2] IS NOT NULL
              AND btrim(u.replica_endpoints[2]) != ''
            ORDER BY user_id ASC
            "#,
        )
        .bind(endpoint)
        .fetch_all(pool)
        .await;

        let (status, rows) = match query_result {
            Ok(r) => ("success", Ok(r)),
            Err(e) => ("error", Err(e)),
        };
        metrics::record_db_query("get_users_by_primary_node", status, start.elapsed());

        let rows = rows?;

        tracing::debug!(
            target: "dp.repository.users",
            count = rows.len(),
            "Fetched users with primary replica on node"
        );

        Ok(rows
            .into_iter()
            .map(|r| UserReplica {
                user_id: r.user_id,
                wallet: r.wallet,
                replica_set: ReplicaSet::parse(&r.content_node_endpoint),
            })
            .collect())
    }
}

// ============================================================================
// Database Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserReplicaRow {
    user_id: i32,
    wallet: Option<String>,
    content_node_endpoint: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_replica_fields() {
        let user = UserReplica {
            user_id: 7,
            wallet: Some("0xabc".to_string()),
            replica_set: ReplicaSet::parse("https://a.example.com,https://b.example.com"),
        };

        assert_eq!(user.user_id, 7);
        assert_eq!(user.wallet, Some("0xabc".to_string()));
        assert_eq!(user.replica_set.primary(), Some("https://a.example.com"));
        assert!(user.replica_set.has_secondary());
    }

    #[test]
    fn test_user_replica_serializes_as_mapping() {
        let user = UserReplica {
            user_id: 7,
            wallet: None,
            replica_set: ReplicaSet::parse("https://a.example.com,https://b.example.com"),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["user_id"], 7);
        assert!(json["wallet"].is_null());
        assert_eq!(json["replica_set"]["primary"], "https://a.example.com");
        assert_eq!(json["replica_set"]["secondaries"][0], "https://b.example.com");
    }
}
