//! Integration tests for user search.

mod helpers;

#[tokio::test]
async fn test_search_matches_email_or_username_ignoring_case() {
    let app = helpers::TestApp::new();

    let by_name = app.user_service.search("CAR").await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].email, "carla@example.com");

    let by_email = app.user_service.search("bo@").await.unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].username, "bo");
}

#[tokio::test]
async fn test_search_keeps_directory_order() {
    let app = helpers::TestApp::new();
    let all = app.user_service.search("example.com").await.unwrap();
    let names: Vec<_> = all.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["ana", "bo", "carla", "dee"]);
}

#[tokio::test]
async fn test_search_results_carry_no_credentials() {
    let app = helpers::TestApp::new();
    let results = app.user_service.search("").await.unwrap();
    assert_eq!(results.len(), 4);

    let json = serde_json::to_string(&results).unwrap();
    assert!(!json.contains("password"));
}

#[tokio::test]
async fn test_search_without_match_is_empty() {
    let app = helpers::TestApp::new();
    assert!(app.user_service.search("zed").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_whitespace_query_is_matched_literally() {
    let app = helpers::TestApp::new();
    assert!(app.user_service.search(" ").await.unwrap().is_empty());
}
