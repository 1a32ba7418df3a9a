use anyhow::Result;
use serde_json::{json, Value};
use vk_schema::{validate, validate_many, AccessTokenRequest, IssueKind, User};

/// 有 access_token 的請求可以建立
#[test]
fn test_access_token_required() -> Result<()> {
    let request = json!({"access_token": "token123"});
    let token = validate::<AccessTokenRequest>(&request)?;
    assert_eq!(token.access_token(), "token123");
    Ok(())
}

#[test]
fn test_access_token_missing() {
    let err = validate::<AccessTokenRequest>(&json!({})).unwrap_err();
    assert_eq!(err.issue_count(), 1);
    assert!(err.find("access_token").unwrap().is_missing());
}

#[test]
fn test_users_get_success() -> Result<()> {
    let response = json!([
        {"id": 345, "first_name": "Alex", "second_name": "Hit"},
        {"id": 678, "first_name": "Oleg", "second_name": "Hit2"}
    ]);

    let users = validate_many::<User>(&response)?;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].first_name(), "Alex");
    assert_eq!(users[0].second_name(), "Hit");
    assert_eq!(users[1].id(), 678);
    assert_eq!(users[1].first_name(), "Oleg");
    Ok(())
}

#[test]
fn test_users_get_no_users() -> Result<()> {
    let users = validate_many::<User>(&json!([]))?;
    assert!(users.is_empty());
    Ok(())
}

#[test]
fn test_users_get_one_user() -> Result<()> {
    let users = validate_many::<User>(&json!([
        {"id": 678, "first_name": "Oleg", "second_name": "Hit2"}
    ]))?;

    assert_eq!(users, vec![User::new(678, "Oleg", "Hit2")]);
    Ok(())
}

/// 1000 筆使用者保持輸入順序
#[test]
fn test_users_get_max_users() -> Result<()> {
    let response = Value::Array(
        (0..1000)
            .map(|i| json!({"id": i, "first_name": "User", "second_name": i.to_string()}))
            .collect(),
    );

    let users = validate_many::<User>(&response)?;
    assert_eq!(users.len(), 1000);
    for (i, user) in users.iter().enumerate() {
        assert_eq!(user.id(), i as i64);
        assert_eq!(user.second_name(), i.to_string());
    }

    let last = users.last().unwrap();
    assert_eq!(last.id(), 999);
    assert_eq!(last.first_name(), "User");
    assert_eq!(last.second_name(), "999");
    Ok(())
}

#[test]
fn test_user_invalid_id_format() {
    let user = json!({
        "id": "invalid_id_format",
        "first_name": "Alex",
        "second_name": "Hit"
    });

    let err = validate::<User>(&user).unwrap_err();
    assert_eq!(err.issue_count(), 1);
    assert!(matches!(
        err.find("id").unwrap().kind,
        IssueKind::WrongType { .. }
    ));
}

#[test]
fn test_user_numeric_string_id_is_coerced() -> Result<()> {
    let user = validate::<User>(&json!({
        "id": "345",
        "first_name": "Alex",
        "second_name": "Hit"
    }))?;
    assert_eq!(user.id(), 345);
    Ok(())
}

/// 千分位底線與 .0 結尾的字串也能轉成整數
#[test]
fn test_user_id_separator_and_zero_fraction() -> Result<()> {
    for (raw, expected) in [("3.0", 3), ("1_000", 1000), ("-12.00", -12)] {
        let user = validate::<User>(&json!({
            "id": raw,
            "first_name": "Alex",
            "second_name": "Hit"
        }))?;
        assert_eq!(user.id(), expected);
    }

    for raw in ["3.5", "1e3", "0x10", "1__000"] {
        let user = json!({"id": raw, "first_name": "Alex", "second_name": "Hit"});
        assert!(validate::<User>(&user).is_err(), "{} should be rejected", raw);
    }

    let user = json!({"id": true, "first_name": "Alex", "second_name": "Hit"});
    assert!(validate::<User>(&user).is_err());
    Ok(())
}

/// second_name 被換成未知欄位時必須失敗
#[test]
fn test_user_second_name_replaced() {
    let user = json!({
        "id": 345,
        "first_name": "Alex",
        "last_name": "Hit111"
    });

    let err = validate::<User>(&user).unwrap_err();
    assert_eq!(err.issue_count(), 1);
    assert!(err.find("second_name").unwrap().is_missing());
}

#[test]
fn test_users_get_invalid_response() {
    let response = json!([{"invalid_attr": "value"}]);

    let err = validate_many::<User>(&response).unwrap_err();
    assert_eq!(err.issue_count(), 3);
    assert!(err.issues.iter().all(|issue| issue.is_missing()));
    assert!(err.find("0.id").is_some());
    assert!(err.find("0.first_name").is_some());
    assert!(err.find("0.second_name").is_some());
}

#[test]
fn test_serde_json_from_str_matches_validator() {
    let users: Vec<User> = serde_json::from_str(
        r#"[{"id": 345, "first_name": "Alex", "second_name": "Hit"},
            {"id": 678, "first_name": "Oleg", "second_name": "Hit2"}]"#,
    )
    .unwrap();
    assert_eq!(users[1].id(), 678);

    assert!(serde_json::from_str::<AccessTokenRequest>("{}").is_err());
    assert!(serde_json::from_str::<Vec<User>>(r#"[{"invalid_attr": "value"}]"#).is_err());
}
