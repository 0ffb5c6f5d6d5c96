use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Account role
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserType {
    /// Regular account
    #[default]
    User,
    /// Administrative account
    Admin,
}

/// User entity - represents an account stored in MongoDB
///
/// Wire and storage share one shape. Field names keep the collection's
/// historical short forms (`fname`, `lname`, `mobileNo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// First name
    #[serde(rename = "fname")]
    pub first_name: String,
    /// Last name
    #[serde(rename = "lname")]
    pub last_name: String,
    /// Login name, assigned from the mobile number at creation
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Contact email
    pub email: String,
    /// Mobile number
    #[serde(rename = "mobileNo")]
    pub mobile_no: String,
    /// Stored credential
    pub password: String,
    /// Account role
    #[serde(rename = "userType")]
    pub user_type: UserType,
    /// Whether the account is enabled
    pub active: bool,
}

/// DTO for creating a new user
///
/// Every field defaults to empty so a partial body deserializes and fails
/// field validation instead of JSON rejection.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(default, rename = "fname")]
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(default, rename = "lname")]
    #[validate(length(min = 1))]
    pub last_name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[serde(default, rename = "mobileNo")]
    #[validate(length(min = 7, max = 10))]
    pub mobile_no: String,
    #[serde(default)]
    pub password: String,
}

/// DTO for partially updating a user
///
/// Only the name fields are writable. Absent and empty values both mean
/// "leave unchanged", so a field can never be cleared once set.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(rename = "fname")]
    pub first_name: Option<String>,
    #[serde(rename = "lname")]
    pub last_name: Option<String>,
}

/// The subset of [`UpdateUser`] fields that survived the non-empty filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for the listing endpoint
///
/// `sort_by` and `sort_order` are carried for wire compatibility; the
/// listing applies a fixed first-name ascending sort regardless.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListRequest {
    /// Zero-based page index
    pub page: u64,
    /// Records per page; zero means no limit
    pub page_size: u64,
    /// Requested sort field (not applied)
    pub sort_by: String,
    /// Requested sort direction (not applied)
    pub sort_order: i32,
}

/// Query filters for listing users
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserFilter {
    /// Filter by enabled flag
    pub active: Option<bool>,
    /// Filter by role
    pub user_type: Option<UserType>,
}

/// Acknowledgement returned by the create operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedUser {
    #[serde(rename = "insertedId")]
    pub inserted_id: Uuid,
}

impl User {
    /// Create a new user from the CreateUser DTO
    ///
    /// Mints a fresh id and applies the account defaults: the login name
    /// mirrors the mobile number, the account starts active with the
    /// regular role.
    pub fn new(input: CreateUser) -> Self {
        Self {
            id: Uuid::now_v7(),
            first_name: input.first_name,
            last_name: input.last_name,
            user_name: input.mobile_no.clone(),
            email: input.email,
            mobile_no: input.mobile_no,
            password: input.password,
            user_type: UserType::default(),
            active: true,
        }
    }
}

impl UpdateUser {
    /// Collapse the payload into the fields that should be written.
    /// Empty strings count as absent.
    pub fn into_fields(self) -> UpdateFields {
        UpdateFields {
            first_name: self.first_name.filter(|v| !v.is_empty()),
            last_name: self.last_name.filter(|v| !v.is_empty()),
        }
    }
}

impl UpdateFields {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CreateUser {
        CreateUser {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            mobile_no: "5550100".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_new_user_applies_account_defaults() {
        let user = User::new(valid_input());

        assert_eq!(user.user_name, user.mobile_no);
        assert_eq!(user.user_type, UserType::User);
        assert!(user.active);
    }

    #[test]
    fn test_new_user_mints_distinct_ids() {
        let first = User::new(valid_input());
        let second = User::new(valid_input());

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_mobile_no_length_boundaries() {
        for (digits, ok) in [(6, false), (7, true), (10, true), (11, false)] {
            let mut input = valid_input();
            input.mobile_no = "5".repeat(digits);
            assert_eq!(input.validate().is_ok(), ok, "mobileNo of {digits} chars");
        }
    }

    #[test]
    fn test_empty_body_fails_field_validation() {
        let input: CreateUser = serde_json::from_str("{}").unwrap();
        let err = input.validate().unwrap_err();

        let fields = err.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("mobile_no"));
    }

    #[test]
    fn test_user_serializes_with_wire_names() {
        let user = User::new(valid_input());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("_id").is_some());
        assert_eq!(json["fname"], "Grace");
        assert_eq!(json["lname"], "Hopper");
        assert_eq!(json["userName"], "5550100");
        assert_eq!(json["mobileNo"], "5550100");
        assert_eq!(json["userType"], "user");
        assert_eq!(json["active"], true);
    }

    #[test]
    fn test_user_deserializes_from_id_alias() {
        let json = serde_json::json!({
            "id": Uuid::now_v7(),
            "fname": "Grace",
            "lname": "Hopper",
            "userName": "5550100",
            "email": "grace@example.com",
            "mobileNo": "5550100",
            "password": "secret",
            "userType": "admin",
            "active": false,
        });

        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.user_type, UserType::Admin);
        assert!(!user.active);
    }

    #[test]
    fn test_into_fields_drops_empty_strings() {
        let update = UpdateUser {
            first_name: Some(String::new()),
            last_name: Some("Curie".to_string()),
        };

        let fields = update.into_fields();
        assert_eq!(fields.first_name, None);
        assert_eq!(fields.last_name.as_deref(), Some("Curie"));
        assert!(!fields.is_empty());
        assert!(UpdateUser::default().into_fields().is_empty());
    }

    #[test]
    fn test_list_request_accepts_pascal_case_body() {
        let request: ListRequest = serde_json::from_value(serde_json::json!({
            "Page": 2,
            "PageSize": 10,
            "SortBy": "email",
            "SortOrder": -1,
        }))
        .unwrap();

        assert_eq!(request.page, 2);
        assert_eq!(request.page_size, 10);
        assert_eq!(request.sort_by, "email");
        assert_eq!(request.sort_order, -1);

        let defaulted: ListRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted.page, 0);
        assert_eq!(defaulted.page_size, 0);
    }
}
