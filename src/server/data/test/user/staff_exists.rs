use super::*;

/// Tests detecting when staff users exist.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_staff_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_staff_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.staff_exists().await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting when only regular users exist.
///
/// Verifies that the repository returns false when users exist but none of them is staff
/// (first start before the admin account has been bootstrapped).
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.staff_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
