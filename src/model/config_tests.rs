use super::*;
use std::io::Write;
use yare::parameterized;

#[test]
fn parses_complete_config() {
    let config = JiraConfig::parse(
        r#"{"url": "https://jira.example.com/", "board": 803, "storyPointsField": "customfield_10080"}"#,
    )
    .unwrap();

    assert_eq!(
        config,
        JiraConfig::new("https://jira.example.com", 803, "customfield_10080")
    );
    assert_eq!(config.url, "https://jira.example.com");
}

#[parameterized(
    no_url = { r#"{"board": 1, "storyPointsField": "cf"}"#, "url" },
    no_board = { r#"{"url": "https://jira", "storyPointsField": "cf"}"#, "board" },
    board_as_text = { r#"{"url": "https://jira", "board": "1", "storyPointsField": "cf"}"#, "board" },
    no_field = { r#"{"url": "https://jira", "board": 1}"#, "storyPointsField" },
)]
fn missing_key_is_config_error(json: &str, key: &str) {
    match JiraConfig::parse(json) {
        Err(Error::Config(message)) => assert!(message.contains(key), "{message}"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn malformed_json_is_json_error() {
    assert!(matches!(JiraConfig::parse("{"), Err(Error::Json(_))));
}

#[test]
fn reads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"url": "https://jira.example.com", "board": 7, "storyPointsField": "customfield_1"}}"#
    )
    .unwrap();

    let config = JiraConfig::from_config(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.board, 7);
    assert_eq!(config.story_points_field, "customfield_1");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jira.json");
    assert!(matches!(
        JiraConfig::from_config(path.to_str().unwrap()),
        Err(Error::Io(_))
    ));
}
