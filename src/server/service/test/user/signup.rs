use super::*;

/// Tests a valid signup.
///
/// Verifies that the account is created and the stored password is a hash
/// that verifies against the plaintext.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_account_with_hashed_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.signup(signup_params()).await.unwrap();

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.username, "ada-lovelace");
    assert_ne!(user.hashed_password, "difference engine");
    assert!(bcrypt::verify("difference engine", &user.hashed_password).unwrap());

    Ok(())
}

/// Tests signup with an email already in use.
///
/// Expected: Err(UserExists) naming the email field
#[tokio::test]
async fn duplicate_email_is_user_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .build()
        .await?;

    let service = UserService::new(db);
    let result = service.signup(signup_params()).await;

    assert!(matches!(
        result,
        Err(AppError::UserExists { field, .. }) if field == "email"
    ));

    Ok(())
}

/// Tests signup with a username already in use.
///
/// Expected: Err(UserExists) naming the username field
#[tokio::test]
async fn duplicate_username_is_user_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("ada-lovelace")
        .build()
        .await?;

    let service = UserService::new(db);
    let result = service.signup(signup_params()).await;

    assert!(matches!(
        result,
        Err(AppError::UserExists { field, .. }) if field == "username"
    ));

    Ok(())
}

/// Tests that field failures are collected into one response.
///
/// Expected: Err(Validation) naming every failed field
#[tokio::test]
async fn collects_all_field_errors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .signup(SignupParams {
            first_name: "".to_string(),
            last_name: "".to_string(),
            email: "not-an-email".to_string(),
            username: "ab".to_string(),
            password: "short".to_string(),
        })
        .await;

    let Err(AppError::Validation { message, errors }) = result else {
        panic!("expected a validation failure");
    };
    assert_eq!(message, "Bad Request");
    for field in ["firstName", "lastName", "email", "username", "password"] {
        assert!(errors.contains_key(field), "missing error for {field}");
    }

    Ok(())
}

/// Tests that an email-shaped username is rejected.
///
/// Expected: Err(Validation) with the username message
#[tokio::test]
async fn email_shaped_username_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .signup(SignupParams {
            username: "ada@example.com".to_string(),
            ..signup_params()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation { errors, .. })
            if errors.get("username").map(String::as_str) == Some("Username cannot be an email.")
    ));

    Ok(())
}
