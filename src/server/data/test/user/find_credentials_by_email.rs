use super::*;

/// Tests looking up a user's password hash by email.
///
/// Expected: Ok(Some) with the stored hash
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("passenger@station.test")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (user, hash) = repo
        .find_credentials_by_email("passenger@station.test")
        .await?
        .unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(hash, created.password_hash);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_email("nobody@station.test").await?;

    assert!(result.is_none());

    Ok(())
}
