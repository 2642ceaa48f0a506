use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository creates a user with the given email and staff flag
/// and stamps the creation time.
///
/// Expected: Ok with user created and staff status set to false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create("passenger@station.test".to_string(), "hash".to_string(), false)
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.email, "passenger@station.test");
    assert!(!user.is_staff);
    assert_eq!(repo.find_by_id(user.id).await?, Some(user));

    Ok(())
}

/// Tests that emails are unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@station.test")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create("taken@station.test".to_string(), "hash".to_string(), false)
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
