use crate::database::Store;
use crate::models::{LoginRequest, RegisterRequest, UpdateProfileRequest, User, UserChanges};
use crate::utils::{hash_password_blocking, verify_password_blocking, AppError};

// User registration. An empty password is hashed like any other; only a missing one fails.
pub async fn register(store: &dyn Store, request: &RegisterRequest) -> Result<User, AppError> {
    let password = request
        .password
        .as_deref()
        .ok_or_else(|| AppError::Validation("password is required".to_string()))?;

    let hashed = hash_password_blocking(password.to_string()).await?;
    let user = User::new(
        request.username.as_deref().unwrap_or_default(),
        request.email.as_deref().unwrap_or_default(),
        hashed,
    )?;

    store.insert_user(user).await
}

/// Returns the username on success.
///
/// Unknown email and wrong password both map to `InvalidCredentials`.
pub async fn login(store: &dyn Store, request: &LoginRequest) -> Result<String, AppError> {
    let (Some(email), Some(password)) = (request.email.as_deref(), request.password.as_deref())
    else {
        return Err(AppError::InvalidCredentials);
    };

    let user = store
        .find_user_by_email(email.trim())
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let valid = verify_password_blocking(password.to_string(), user.password.clone()).await?;
    if !valid {
        return Err(AppError::InvalidCredentials);
    }

    Ok(user.username)
}

pub async fn get_profile(store: &dyn Store, email: &str) -> Result<User, AppError> {
    store
        .find_user_by_email(email.trim())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", email)))
}

/// Applies the new username and, only when supplied, a freshly hashed password.
///
/// The username is trimmed but not re-validated, so a blank value is stored as "".
pub async fn update_profile(
    store: &dyn Store,
    email: &str,
    request: &UpdateProfileRequest,
) -> Result<User, AppError> {
    let username = request.username.as_deref().map(|u| u.trim().to_string());

    let password_hash = match request.password.as_deref().filter(|p| !p.is_empty()) {
        Some(password) => Some(hash_password_blocking(password.to_string()).await?),
        None => None,
    };

    store
        .update_user_by_email(email.trim(), UserChanges { username, password_hash })
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", email)))
}

/// Removes the account only; recipes referencing it are left in place.
pub async fn delete_account(store: &dyn Store, email: &str) -> Result<(), AppError> {
    store
        .delete_user_by_email(email.trim())
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(format!("user {}", email)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;

    fn register_request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let store = MemoryStore::default();
        register(&store, &register_request(" ana ", "ana@example.com", "pw1")).await.unwrap();

        let username = login(&store, &login_request("ana@example.com", "pw1")).await.unwrap();
        assert_eq!(username, "ana");
    }

    #[tokio::test]
    async fn test_register_stores_hash_only() {
        let store = MemoryStore::default();
        let user = register(&store, &register_request("ana", "ana@example.com", "pw1")).await.unwrap();
        assert_ne!(user.password, "pw1");
        assert!(crate::utils::verify_password("pw1", &user.password).unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let store = MemoryStore::default();
        register(&store, &register_request("ana", "ana@example.com", "pw1")).await.unwrap();

        let second = register(&store, &register_request("bia", " ana@example.com ", "pw2")).await;
        assert!(matches!(second, Err(AppError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let store = MemoryStore::default();
        let missing_password = RegisterRequest {
            username: Some("ana".to_string()),
            email: Some("ana@example.com".to_string()),
            password: None,
        };
        assert!(matches!(
            register(&store, &missing_password).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            register(&store, &register_request("ana", "   ", "pw")).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_register_accepts_empty_password() {
        let store = MemoryStore::default();
        let user = register(&store, &register_request("ana", "ana@example.com", "")).await.unwrap();
        assert!(crate::utils::verify_password("", &user.password).unwrap());

        assert_eq!(login(&store, &login_request("ana@example.com", "")).await.unwrap(), "ana");
        assert_eq!(
            login(&store, &login_request("ana@example.com", "x")).await,
            Err(AppError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let store = MemoryStore::default();
        register(&store, &register_request("ana", "ana@example.com", "pw1")).await.unwrap();

        let wrong_password = login(&store, &login_request("ana@example.com", "nope")).await;
        let unknown_email = login(&store, &login_request("zoe@example.com", "pw1")).await;
        assert_eq!(wrong_password, Err(AppError::InvalidCredentials));
        assert_eq!(unknown_email, Err(AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_update_password_rotates_credentials() {
        let store = MemoryStore::default();
        register(&store, &register_request("ana", "ana@example.com", "old")).await.unwrap();

        let request = UpdateProfileRequest {
            username: Some("ana maria".to_string()),
            password: Some("new".to_string()),
        };
        let updated = update_profile(&store, "ana@example.com", &request).await.unwrap();
        assert_eq!(updated.username, "ana maria");

        assert_eq!(
            login(&store, &login_request("ana@example.com", "old")).await,
            Err(AppError::InvalidCredentials)
        );
        assert_eq!(
            login(&store, &login_request("ana@example.com", "new")).await.unwrap(),
            "ana maria"
        );
    }

    #[tokio::test]
    async fn test_update_without_password_keeps_hash() {
        let store = MemoryStore::default();
        let created = register(&store, &register_request("ana", "ana@example.com", "pw")).await.unwrap();

        let request = UpdateProfileRequest {
            username: Some("ana b".to_string()),
            password: None,
        };
        let updated = update_profile(&store, "ana@example.com", &request).await.unwrap();
        assert_eq!(updated.password, created.password);
    }

    #[tokio::test]
    async fn test_update_blank_username_is_stored_trimmed() {
        let store = MemoryStore::default();
        register(&store, &register_request("ana", "ana@example.com", "pw")).await.unwrap();

        let request = UpdateProfileRequest {
            username: Some("   ".to_string()),
            password: Some(String::new()),
        };
        let updated = update_profile(&store, "ana@example.com", &request).await.unwrap();
        assert_eq!(updated.username, "");
        assert_eq!(login(&store, &login_request("ana@example.com", "pw")).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let store = MemoryStore::default();
        let request = UpdateProfileRequest {
            username: Some("ghost".to_string()),
            password: None,
        };
        assert!(matches!(
            update_profile(&store, "ghost@example.com", &request).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_then_profile_not_found() {
        let store = MemoryStore::default();
        register(&store, &register_request("ana", "ana@example.com", "pw")).await.unwrap();

        delete_account(&store, "ana@example.com").await.unwrap();
        assert!(matches!(
            get_profile(&store, "ana@example.com").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            delete_account(&store, "ana@example.com").await,
            Err(AppError::NotFound(_))
        ));
    }
}
