//! User-related API endpoints

use crate::error::Result;
use crate::{User, UserApiClient, UsersResponse};

impl UserApiClient {
    // =============================================================================
    // Users
    // =============================================================================

    /// Fetch the user list
    ///
    /// Issues one `GET <base_url>/users` and returns the decoded body exactly
    /// as the backend sent it. Failures are never retried.
    ///
    /// # Example
    /// ```no_run
    /// # use roster_client::UserApiClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = UserApiClient::default();
    /// let users = client.fetch_users().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_users(&self) -> Result<UsersResponse> {
        let url = self.config.endpoint("/users");
        self.get_json(&url).await
    }

    /// Fetch the user list decoded into [`User`] records
    ///
    /// Same request as [`fetch_users`](Self::fetch_users); a body that does not
    /// match the user model fails with a decode error.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.config.endpoint("/users");
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{ClientConfig, NetworkError, User, UserApiClient};
    use anyhow::{Result, anyhow};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer) -> UserApiClient {
        UserApiClient::new(ClientConfig::new(format!("{}/api/v1", server.uri())))
    }

    async fn mount_users(server: &MockServer, status: u16, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/v1/users"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn fetch_users_returns_body_unmodified() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        let fixture = json!([{"id": 1, "name": "Ada"}]);
        mount_users(&server, 200, fixture.clone()).await;

        let users = client_for(&server).fetch_users().await?;
        assert_eq!(users, fixture);
        Ok(())
    }

    #[tokio::test]
    async fn fetch_users_does_not_constrain_shape() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        let fixture = json!({"items": [], "note": null});
        mount_users(&server, 200, fixture.clone()).await;

        let users = client_for(&server).fetch_users().await?;
        assert_eq!(users, fixture);
        Ok(())
    }

    #[tokio::test]
    async fn fetch_users_errors_on_server_failure() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        mount_users(&server, 500, json!({"detail": "boom"})).await;

        let err = client_for(&server)
            .fetch_users()
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert!(matches!(err, NetworkError::Status { status: 500, .. }));
        assert!(err.is_server_error());
        assert!(err.to_string().contains("boom"));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_users_errors_on_missing_route() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        let err = client_for(&server)
            .fetch_users()
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert_eq!(err.status(), Some(404));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_users_errors_when_connection_refused() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        // Reserve a port, then free it so nothing is listening there.
        let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
        let client = UserApiClient::new(ClientConfig::new(format!(
            "http://127.0.0.1:{port}/api/v1"
        )));

        let err = client
            .fetch_users()
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert!(matches!(err, NetworkError::Transport(_)));
        assert_eq!(err.status(), None);
        Ok(())
    }

    #[tokio::test]
    async fn fetch_users_errors_on_malformed_base_url() -> Result<()> {
        let client = UserApiClient::new(ClientConfig::new("not a url"));

        let err = client
            .fetch_users()
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert!(matches!(err, NetworkError::Transport(_)));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_users_errors_on_invalid_json() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_users()
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert!(matches!(err, NetworkError::Decode(_)));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_calls_keep_their_own_results() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let first = MockServer::start().await;
        let second = MockServer::start().await;
        let first_fixture = json!([{"id": 1, "name": "Ada"}]);
        let second_fixture = json!([{"id": 2, "name": "Grace"}, {"id": 3, "name": "Linus"}]);
        mount_users(&first, 200, first_fixture.clone()).await;
        mount_users(&second, 200, second_fixture.clone()).await;

        let first_client = client_for(&first);
        let second_client = client_for(&second);
        let (a, b) = tokio::join!(first_client.fetch_users(), second_client.fetch_users());

        assert_eq!(a?, first_fixture);
        assert_eq!(b?, second_fixture);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_calls_on_one_client_get_distinct_fixtures() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        let first_fixture = json!([{"id": 1}]);
        let second_fixture = json!([{"id": 2}]);
        for fixture in [&first_fixture, &second_fixture] {
            Mock::given(method("GET"))
                .and(path("/api/v1/users"))
                .respond_with(ResponseTemplate::new(200).set_body_json(fixture.clone()))
                .up_to_n_times(1)
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        let (a, b) = tokio::join!(client.fetch_users(), client.fetch_users());
        let (a, b) = (a?, b?);

        // Arrival order decides which mock answers which call.
        assert_ne!(a, b);
        for result in [&a, &b] {
            assert!(*result == first_fixture || *result == second_fixture);
        }
        Ok(())
    }

    #[tokio::test]
    async fn list_users_decodes_records() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        mount_users(
            &server,
            200,
            json!([
                {"id": 1, "username": "user1", "email": "user1@example.com"},
                {"id": 2, "username": "user2", "email": "user2@example.com"}
            ]),
        )
        .await;

        let users = client_for(&server).list_users().await?;
        assert_eq!(
            users,
            vec![
                User::new(1, "user1", "user1@example.com"),
                User::new(2, "user2", "user2@example.com"),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_users_rejects_foreign_shape() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        mount_users(&server, 200, json!([{"id": 1, "name": "Ada"}])).await;

        let err = client_for(&server)
            .list_users()
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert!(matches!(err, NetworkError::Decode(_)));
        Ok(())
    }
}
