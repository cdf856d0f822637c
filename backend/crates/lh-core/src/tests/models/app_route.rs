use crate::AppRoute;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn test_app_route_parse_known_paths() {
    assert_eq!(AppRoute::parse("/"), Some(AppRoute::Dashboard));
    assert_eq!(AppRoute::parse("/login"), Some(AppRoute::Login));
    assert_eq!(AppRoute::parse("/signup"), Some(AppRoute::Signup));
    assert_eq!(AppRoute::parse("/library"), Some(AppRoute::Library));
    assert_eq!(AppRoute::parse("/tutor"), Some(AppRoute::Tutor));
    assert_eq!(AppRoute::parse("/live-chat"), Some(AppRoute::LiveChat));
    assert_eq!(AppRoute::parse("/progress"), Some(AppRoute::Progress));
    assert_eq!(AppRoute::parse("/profile"), Some(AppRoute::Profile));
}

#[test]
fn test_app_route_parse_video_id() {
    assert_eq!(
        AppRoute::parse("/video/42"),
        Some(AppRoute::Video {
            id: "42".to_string()
        })
    );
    assert_eq!(AppRoute::parse("/video/"), None);
    assert_eq!(AppRoute::parse("/video/1/2"), None);
}

#[test]
fn test_app_route_parse_tolerates_trailing_slash() {
    assert_eq!(AppRoute::parse("/library/"), Some(AppRoute::Library));
    assert_eq!(AppRoute::parse("/login/"), Some(AppRoute::Login));
}

#[test]
fn test_app_route_path_round_trips_through_parse() {
    let routes = [
        AppRoute::Login,
        AppRoute::Dashboard,
        AppRoute::Video {
            id: "abc".to_string(),
        },
        AppRoute::Profile,
    ];
    for route in routes {
        assert_eq!(AppRoute::parse(&route.path()), Some(route));
    }
}

#[test]
fn test_app_route_only_login_and_signup_are_public() {
    assert!(!AppRoute::Login.is_protected());
    assert!(!AppRoute::Signup.is_protected());
    assert!(AppRoute::Dashboard.is_protected());
    assert!(AppRoute::LiveChat.is_protected());
    assert!(
        AppRoute::Video {
            id: "1".to_string()
        }
        .is_protected()
    );
}

#[test]
fn given_unknown_path_when_from_str_then_invalid_route_error() {
    let result = AppRoute::from_str("/admin");

    assert_that!(result, err(anything()));
    let message = result.unwrap_err().user_message();
    assert_that!(message, contains_substring("/admin"));
}
