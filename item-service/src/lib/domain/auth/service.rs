use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenPair;

use super::errors::AuthError;
use super::models::Credentials;
use super::ports::AuthServicePort;
use crate::domain::store::StoreError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for the session lifecycle.
///
/// Holds no per-session state: every token it hands out is self-describing.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn register_user(&self, credentials: Credentials) -> Result<User, AuthError> {
        let (username, password) = credentials.into_parts()?;

        // Not atomic with the insert below; the store reports the race as Conflict.
        match self.repository.find_by_username(&username).await {
            Ok(_) => return Err(AuthError::Conflict(username.to_string())),
            Err(StoreError::NotFound) => {}
            Err(e) => return Err(AuthError::Store(e.to_string())),
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| AuthError::Internal(format!("Hashing task failed: {}", e)))?
                .map_err(|e| AuthError::Internal(e.to_string()))?;

        self.repository
            .create(User::new(username, password_hash))
            .await
            .map_err(|e| match e {
                StoreError::Conflict(name) => AuthError::Conflict(name),
                other => AuthError::Internal(format!("User creation failed: {}", other)),
            })
    }

    async fn login_user(&self, credentials: Credentials) -> Result<TokenPair, AuthError> {
        let (username, password) = credentials.into_parts()?;

        let user = match self.repository.find_by_username(&username).await {
            Ok(user) => Some(user),
            Err(StoreError::NotFound) => None,
            Err(e) => return Err(AuthError::Store(e.to_string())),
        };

        // Unknown usernames still pay for a full Argon2 verification.
        let authenticator = Arc::clone(&self.authenticator);
        tokio::task::spawn_blocking(move || match user {
            Some(user) => {
                authenticator.authenticate(user.username.as_str(), &password, &user.password_hash)
            }
            None => Err(authenticator.reject_unknown_user(&password)),
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            AuthenticationError::JwtError(err) => {
                AuthError::Internal(format!("Token generation failed: {}", err))
            }
        })
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<User, AuthError> {
        let attempted = credentials.username.clone();
        let result = self.register_user(credentials).await;
        log_outcome("register", &attempted, &result);
        result
    }

    async fn login(&self, credentials: Credentials) -> Result<TokenPair, AuthError> {
        let attempted = credentials.username.clone();
        let result = self.login_user(credentials).await;
        log_outcome("login", &attempted, &result);
        result
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        if refresh_token.trim().is_empty() {
            let err = AuthError::Validation("Refresh token is required".to_string());
            log_outcome::<String>("refresh", "", &Err(err.clone()));
            return Err(err);
        }

        match self.authenticator.refresh(refresh_token) {
            Ok((claims, access_token)) => {
                tracing::info!(action = "refresh", username = %claims.username(), outcome = "success");
                Ok(access_token)
            }
            Err(auth::JwtError::InvalidToken) => {
                let err = AuthError::InvalidToken;
                log_outcome::<String>("refresh", "", &Err(err.clone()));
                Err(err)
            }
            Err(e) => {
                let err = AuthError::Internal(format!("Token generation failed: {}", e));
                log_outcome::<String>("refresh", "", &Err(err.clone()));
                Err(err)
            }
        }
    }
}

fn log_outcome<T>(action: &'static str, username: &str, result: &Result<T, AuthError>) {
    match result {
        Ok(_) => tracing::info!(action, username, outcome = "success"),
        Err(e @ (AuthError::Store(_) | AuthError::Internal(_))) => {
            tracing::error!(action, username, outcome = "failed", error = %e)
        }
        Err(e) => tracing::warn!(action, username, outcome = "rejected", reason = %e),
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenLifetimes;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn find_by_username(&self, username: &Username) -> Result<User, StoreError>;
            async fn create(&self, user: User) -> Result<User, StoreError>;
        }
    }

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(SECRET, TokenLifetimes::default()))
    }

    fn stored_user(authenticator: &Authenticator, username: &str, password: &str) -> User {
        User::new(
            Username::new(username).unwrap(),
            authenticator.hash_password(password).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_register_success_stores_hash() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Err(StoreError::NotFound));
        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "pw123"
            })
            .times(1)
            .returning(Ok);

        let service = AuthService::new(Arc::new(repository), authenticator());

        let user = service
            .register(Credentials::new("alice", "pw123"))
            .await
            .expect("Registration failed");
        assert_eq!(user.username.as_str(), "alice");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_register_hashing_does_not_block_the_runtime() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .returning(|_| Err(StoreError::NotFound));
        repository.expect_create().returning(Ok);

        let service = Arc::new(AuthService::new(Arc::new(repository), authenticator()));

        let registration = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.register(Credentials::new("alice", "pw123")).await })
        };

        // On a single-threaded runtime these ticks only advance while the hash
        // runs off the worker thread.
        let mut ticks = 0;
        while !registration.is_finished() {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
            ticks += 1;
        }

        assert!(registration.await.unwrap().is_ok());
        assert!(ticks > 2, "runtime stalled during hashing ({} ticks)", ticks);
    }

    #[tokio::test]
    async fn test_register_empty_fields_skips_store() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_username().times(0);
        repository.expect_create().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.register(Credentials::new("", "pw123")).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));

        let result = service.register(Credentials::new("alice", "")).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let authenticator = authenticator();
        let existing = stored_user(&authenticator, "alice", "pw123");

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(existing.clone()));
        repository.expect_create().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator);

        let result = service.register(Credentials::new("alice", "other")).await;
        assert_eq!(result.unwrap_err(), AuthError::Conflict("alice".to_string()));
    }

    #[tokio::test]
    async fn test_register_lookup_failure_is_store_error() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Err(StoreError::Backend("connection reset".to_string())));
        repository.expect_create().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.register(Credentials::new("alice", "pw123")).await;
        assert!(matches!(result, Err(AuthError::Store(_))));
    }

    #[tokio::test]
    async fn test_register_concurrent_duplicate_is_conflict() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .returning(|_| Err(StoreError::NotFound));
        repository
            .expect_create()
            .returning(|user| Err(StoreError::Conflict(user.username.to_string())));

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.register(Credentials::new("alice", "pw123")).await;
        assert_eq!(result.unwrap_err(), AuthError::Conflict("alice".to_string()));
    }

    #[tokio::test]
    async fn test_register_create_failure_is_internal() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .returning(|_| Err(StoreError::NotFound));
        repository
            .expect_create()
            .returning(|_| Err(StoreError::Backend("disk full".to_string())));

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.register(Credentials::new("alice", "pw123")).await;
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }

    #[tokio::test]
    async fn test_login_success_issues_pair() {
        let authenticator = authenticator();
        let existing = stored_user(&authenticator, "alice", "pw123");

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .withf(|username| username.as_str() == "alice")
            .times(1)
            .returning(move |_| Ok(existing.clone()));

        let service = AuthService::new(Arc::new(repository), Arc::clone(&authenticator));

        let pair = service
            .login(Credentials::new("alice", "pw123"))
            .await
            .expect("Login failed");

        let access = authenticator.tokens().verify_access_token(&pair.access_token).unwrap();
        let refresh = authenticator.tokens().verify_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(access.username(), "alice");
        assert_eq!(refresh.username(), "alice");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let authenticator = authenticator();
        let existing = stored_user(&authenticator, "alice", "pw123");

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .returning(move |username| {
                if username.as_str() == "alice" {
                    Ok(existing.clone())
                } else {
                    Err(StoreError::NotFound)
                }
            });

        let service = AuthService::new(Arc::new(repository), authenticator);

        let wrong_password = service
            .login(Credentials::new("alice", "wrong"))
            .await
            .unwrap_err();
        let unknown_user = service
            .login(Credentials::new("bob", "pw123"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password, AuthError::InvalidCredentials);
        assert_eq!(wrong_password, unknown_user);
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_unknown_user_costs_a_full_verification() {
        let authenticator = authenticator();
        let existing = stored_user(&authenticator, "alice", "pw123");

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .returning(move |username| {
                if username.as_str() == "alice" {
                    Ok(existing.clone())
                } else {
                    Err(StoreError::NotFound)
                }
            });

        let service = AuthService::new(Arc::new(repository), authenticator);

        // First unknown-user login also builds the decoy hash.
        let _ = service.login(Credentials::new("bob", "pw123")).await;

        let started = std::time::Instant::now();
        let _ = service.login(Credentials::new("alice", "wrong")).await;
        let wrong_password = started.elapsed();

        let started = std::time::Instant::now();
        let unknown_user = service.login(Credentials::new("bob", "pw123")).await;
        let unknown_user_elapsed = started.elapsed();

        assert_eq!(unknown_user.unwrap_err(), AuthError::InvalidCredentials);
        // Both paths run one Argon2 verification; skipping it is orders of magnitude faster.
        assert!(
            unknown_user_elapsed * 10 >= wrong_password,
            "unknown user took {:?}, wrong password took {:?}",
            unknown_user_elapsed,
            wrong_password
        );
    }

    #[tokio::test]
    async fn test_login_with_malformed_stored_hash_is_invalid_credentials() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_username().returning(|username| {
            Ok(User::new(username.clone(), "not-a-phc-string".to_string()))
        });

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.login(Credentials::new("alice", "pw123")).await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_refresh_mints_access_token_without_rotation() {
        let authenticator = authenticator();
        let refresh_token = authenticator.tokens().issue_refresh_token("alice").unwrap();

        let repository = MockTestUserRepository::new();
        let service = AuthService::new(Arc::new(repository), Arc::clone(&authenticator));

        let first = service.refresh(&refresh_token).await.unwrap();
        let second = service.refresh(&refresh_token).await.unwrap();

        for token in [first, second] {
            let claims = authenticator.validate_access_token(&token).unwrap();
            assert_eq!(claims.username(), "alice");
        }
    }

    #[tokio::test]
    async fn test_refresh_rejections() {
        let authenticator = authenticator();
        let access_token = authenticator.tokens().issue_access_token("alice").unwrap();

        let service = AuthService::new(Arc::new(MockTestUserRepository::new()), authenticator);

        assert!(matches!(
            service.refresh("").await,
            Err(AuthError::Validation(_))
        ));
        assert_eq!(
            service.refresh("not.a.token").await.unwrap_err(),
            AuthError::InvalidToken
        );
        assert_eq!(
            service.refresh(&access_token).await.unwrap_err(),
            AuthError::InvalidToken
        );
    }
}
