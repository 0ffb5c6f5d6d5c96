use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// The person who published a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Creator {
    #[serde(default, rename = "firstName")]
    #[validate(length(min = 3, max = 15))]
    pub first_name: String,
    #[serde(default, rename = "lastName")]
    #[validate(length(min = 1))]
    pub last_name: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 130))]
    pub age: u8,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
}

/// A catalogue entry
///
/// Fields default to empty so a partial body reaches field validation
/// instead of a JSON rejection, same as the user DTOs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Video {
    #[serde(default)]
    #[validate(length(min = 3, max = 55))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 5, max = 150))]
    pub description: String,
    #[serde(default)]
    #[validate(url)]
    pub url: String,
    #[validate(nested)]
    pub creator: Creator,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_video() -> Video {
        Video {
            title: "Intro to Rust".to_string(),
            description: "Ownership and borrowing from scratch".to_string(),
            url: "https://videos.example.com/rust-intro".to_string(),
            creator: Creator {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                age: 85,
                email: "grace@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_video_passes() {
        assert!(valid_video().validate().is_ok());
    }

    #[test]
    fn test_short_title_fails() {
        let mut video = valid_video();
        video.title = "ab".to_string();

        let errors = video.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_non_url_fails() {
        let mut video = valid_video();
        video.url = "not a url".to_string();

        let errors = video.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_creator_violations_surface_through_nested_validation() {
        let mut video = valid_video();
        video.creator.first_name = "Al".to_string();
        video.creator.age = 0;

        assert!(video.validate().is_err());
    }
}
