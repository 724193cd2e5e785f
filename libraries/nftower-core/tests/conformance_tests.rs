//! Conformance tests for the user record shapes.
//!
//! These exercise the public checks against realistic backend payloads and
//! use property tests to cover every mandatory field.

use nftower_core::{
    check_jwt_auth_data, check_user_data, check_user_profile, parse_user_data,
    parse_user_profile, CoreError, Role, UserData, UserId, ViolationKind,
};
use proptest::prelude::*;
use serde_json::{json, Value};

const USER_DATA_FIELDS: [&str; 10] = [
    "id",
    "userName",
    "email",
    "roles",
    "jwtAuthData",
    "firstName",
    "lastName",
    "organization",
    "description",
    "avatar",
];

const MANDATORY_AUTH_FIELDS: [&str; 5] =
    ["username", "roles", "access_token", "token_type", "expires_in"];

fn user_data_json() -> Value {
    json!({
        "id": 41,
        "userName": "pditommaso",
        "email": "paolo@example.com",
        "roles": ["ROLE_USER"],
        "jwtAuthData": {
            "username": "pditommaso",
            "roles": ["ROLE_USER"],
            "access_token": "eyJhbGciOiJIUzI1NiJ9.e30.sig",
            "token_type": "Bearer",
            "expires_in": 3600,
            "refresh_token": "eyJhbGciOiJIUzI1NiJ9.refresh"
        },
        "firstName": "Paolo",
        "lastName": "Di Tommaso",
        "organization": "Seqera Labs",
        "description": "Pipelines all the way down",
        "avatar": "https://example.com/avatar/41.png"
    })
}

// =============================================================================
// Parsing
// =============================================================================

mod parsing {
    use super::*;

    #[test]
    fn test_parse_valid_record() {
        let user = parse_user_data(&user_data_json().to_string()).unwrap();

        assert_eq!(user.id, UserId::new(41));
        assert_eq!(user.user_name, "pditommaso");
        assert_eq!(user.roles, vec![Role::User]);
        assert_eq!(user.jwt_auth_data.expires_in, 3600);
        assert_eq!(user.display_name(), "Paolo Di Tommaso");
    }

    #[test]
    fn test_empty_strings_are_accepted() {
        let mut value = user_data_json();
        for field in ["firstName", "lastName", "organization", "description", "avatar"] {
            value[field] = json!("");
        }
        value["roles"] = json!([]);

        let user = UserData::from_value(value).unwrap();
        assert!(user.roles.is_empty());
        assert_eq!(user.display_name(), "pditommaso");
    }

    #[test]
    fn test_roles_keep_server_order() {
        let mut value = user_data_json();
        value["roles"] = json!(["ROLE_ADMIN", "ROLE_USER"]);

        let user = UserData::from_value(value).unwrap();
        assert_eq!(user.roles, vec![Role::Admin, Role::User]);
    }

    #[test]
    fn test_invalid_json_is_a_serialization_error() {
        match parse_user_data("{not json") {
            Err(CoreError::Serialization(_)) => {}
            other => panic!("Expected Serialization error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_conforming_reports_every_problem() {
        let mut value = user_data_json();
        value["id"] = json!("41");
        value["roles"] = json!(["ROLE_USER", "ROLE_OWNER", 3]);
        value.as_object_mut().unwrap().remove("avatar");
        value["jwtAuthData"]["expires_in"] = json!(-1);

        let err = parse_user_data(&value.to_string()).unwrap_err();
        let report = err.report().expect("conformance report");

        let paths: Vec<&str> = report.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "$.id",
                "$.roles[1]",
                "$.roles[2]",
                "$.jwtAuthData.expires_in",
                "$.avatar",
            ]
        );
        assert_eq!(
            report.violations()[1].kind,
            ViolationKind::UnknownRole {
                label: "ROLE_OWNER".to_string()
            }
        );
    }

    #[test]
    fn test_parse_profile_without_auth_data() {
        let mut value = user_data_json();
        value.as_object_mut().unwrap().remove("jwtAuthData");

        let profile = parse_user_profile(&value.to_string()).unwrap();
        assert_eq!(profile.organization, "Seqera Labs");
    }

    #[test]
    fn test_root_must_be_object() {
        let report = check_user_data(&json!("user"));
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.violations()[0].kind,
            ViolationKind::NotAnObject { found: "string" }
        );
    }

    #[test]
    fn test_auth_data_must_be_object() {
        let mut value = user_data_json();
        value["jwtAuthData"] = json!("token");

        let report = check_user_data(&value);
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "$.jwtAuthData");
    }

    #[test]
    fn test_id_beyond_i64_is_a_type_error() {
        let mut value = user_data_json();
        value["id"] = json!(u64::MAX);

        let report = check_user_data(&value);
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "$.id");
        assert_eq!(
            report.violations()[0].kind,
            ViolationKind::WrongType {
                expected: "integer",
                found: "number"
            }
        );
        assert!(UserData::from_value(value).is_err());
    }

    #[test]
    fn test_expires_in_must_be_a_non_negative_integer() {
        for expires_in in [json!(-5), json!(1.5)] {
            let mut value = user_data_json();
            value["jwtAuthData"]["expires_in"] = expires_in;

            let report = check_user_data(&value);
            assert_eq!(report.len(), 1);
            assert_eq!(report.violations()[0].path, "$.jwtAuthData.expires_in");
            assert_eq!(
                report.violations()[0].kind,
                ViolationKind::WrongType {
                    expected: "non-negative integer",
                    found: "number"
                }
            );
        }
    }

    #[test]
    fn test_standalone_auth_data_check() {
        let report = check_jwt_auth_data(&json!({ "username": "x" }));
        let paths: Vec<&str> = report.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["$.roles", "$.access_token", "$.token_type", "$.expires_in"]);
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn dropping_a_top_level_field_reports_it_missing(index in 0usize..USER_DATA_FIELDS.len()) {
        let field = USER_DATA_FIELDS[index];
        let mut value = user_data_json();
        value.as_object_mut().unwrap().remove(field);

        let report = check_user_data(&value);
        prop_assert_eq!(report.len(), 1);
        prop_assert_eq!(&report.violations()[0].path, &format!("$.{}", field));
        prop_assert_eq!(&report.violations()[0].kind, &ViolationKind::Missing);
    }

    #[test]
    fn dropping_an_auth_field_reports_nested_path(index in 0usize..MANDATORY_AUTH_FIELDS.len()) {
        let field = MANDATORY_AUTH_FIELDS[index];
        let mut value = user_data_json();
        value["jwtAuthData"].as_object_mut().unwrap().remove(field);

        let report = check_user_data(&value);
        prop_assert_eq!(report.len(), 1);
        prop_assert_eq!(&report.violations()[0].path, &format!("$.jwtAuthData.{}", field));
    }

    #[test]
    fn any_integer_id_conforms(id in any::<i64>()) {
        let mut value = user_data_json();
        value["id"] = json!(id);

        let user = UserData::from_value(value).unwrap();
        prop_assert_eq!(user.id.get(), id);
    }

    #[test]
    fn any_text_is_accepted_in_profile_fields(text in ".*") {
        let mut value = user_data_json();
        value["description"] = json!(text);

        prop_assert!(check_user_data(&value).is_conforming());
        prop_assert!(check_user_profile(&value).is_conforming());
    }
}
