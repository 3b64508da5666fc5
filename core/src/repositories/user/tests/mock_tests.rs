//! Tests for the mock user repository

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{MockUserRepository, UserRepository};

fn sample_user(email: &str) -> User {
    User::new(
        "Test User".to_string(),
        email.to_string(),
        "digest".to_string(),
    )
}

#[tokio::test]
async fn test_create_and_find_by_email() {
    let repo = MockUserRepository::new();
    let user = sample_user("a@a.com");

    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created.id, user.id);

    let found = repo.find_by_email("a@a.com").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);

    assert!(repo.find_by_email("b@b.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = MockUserRepository::new();
    let user = repo.create(sample_user("a@a.com")).await.unwrap();

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.email, "a@a.com");

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let repo = MockUserRepository::new();
    repo.create(sample_user("a@a.com")).await.unwrap();

    let result = repo.create(sample_user("a@a.com")).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
    ));
}

#[tokio::test]
async fn test_delete() {
    let repo = MockUserRepository::new();
    let user = repo.create(sample_user("a@a.com")).await.unwrap();

    assert!(repo.delete(user.id).await.unwrap());
    assert!(!repo.delete(user.id).await.unwrap());
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_exists_by_email() {
    let repo = MockUserRepository::new();
    assert!(!repo.exists_by_email("a@a.com").await.unwrap());

    repo.create(sample_user("a@a.com")).await.unwrap();
    assert!(repo.exists_by_email("a@a.com").await.unwrap());
}
