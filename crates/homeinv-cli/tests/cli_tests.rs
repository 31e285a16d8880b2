use homeinv_cli::{
    app::{config_manager, load_config},
    commands,
    output::OutputStyle,
    App, Command, ConfigAction,
};
use homeinv_config::AppConfig;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn app_for(server: &MockServer) -> App {
    let mut config = AppConfig::default();
    config.api.base_url = server.uri();
    App::new(&config).unwrap()
}

async fn run(app: &App, command: Command) -> anyhow::Result<String> {
    let mut out = Vec::new();
    commands::execute(app, command, &OutputStyle::plain(), &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_login_prints_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(7)))
        .mount(&server)
        .await;

    let app = app_for(&server);
    let output = run(
        &app,
        Command::Login {
            username: "ana".into(),
            password: "secret".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(output, "✓ Logged in as user 7\n");
    assert_eq!(app.session().user_id(), Some(7));
}

#[tokio::test]
async fn test_homes_lists_both_groups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/homes/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "OWNER": [{ "id": 1, "homeName": "Flat", "ownedBy": 3 }],
            "MEMBER": []
        })))
        .mount(&server)
        .await;

    let output = run(&app_for(&server), Command::Homes { user_id: 3 })
        .await
        .unwrap();

    assert_eq!(output, "Owned homes\n  [1] Flat\nMember of\n  (none)\n");
}

#[tokio::test]
async fn test_search_without_matches_prints_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/home/5"))
        .and(query_param("search_word", "sock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let output = run(
        &app_for(&server),
        Command::Search {
            home_id: 5,
            word: "sock".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(output, "ℹ No items found\n");
}

#[tokio::test]
async fn test_server_error_becomes_command_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms/home/5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = run(&app_for(&server), Command::Rooms { home_id: 5 })
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "ERROR: 500 Internal Server Error");
}

#[tokio::test]
async fn test_invitations_survive_missing_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/invitations/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 11, "inviterId": 8, "inviteeId": 3, "homeId": 6 },
            { "id": 12, "inviterId": 9, "inviteeId": 3, "homeId": 7 }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/invitations/info/11"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/invitations/info/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12, "inviterName": "bo", "homeName": "Cabin"
        })))
        .mount(&server)
        .await;

    let output = run(&app_for(&server), Command::Invitations { user_id: 3 })
        .await
        .unwrap();

    assert_eq!(
        output,
        "Invitations\n  [11] home 6\n  [12] bo invited you to Cabin\n"
    );
}

#[tokio::test]
async fn test_accept_prints_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/invitations/accept/11"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let output = run(&app_for(&server), Command::Accept { id: 11 })
        .await
        .unwrap();

    assert_eq!(output, "✓ Invitation 11 accepted\n");
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();
    let manager = config_manager(Some(dir.path().join("config.toml")));
    let config = load_config(&manager, Some("http://10.0.0.2:8080/")).unwrap();
    let style = OutputStyle::plain();

    let mut out = Vec::new();
    commands::config(&manager, &config, ConfigAction::Init { force: false }, &style, &mut out).unwrap();
    assert!(manager.config_path().exists());

    let again = commands::config(&manager, &config, ConfigAction::Init { force: false }, &style, &mut Vec::new());
    assert!(again.is_err());

    let reloaded = load_config(&manager, None).unwrap();
    assert_eq!(reloaded.api.base_url, "http://10.0.0.2:8080/");

    let mut shown = Vec::new();
    commands::config(&manager, &reloaded, ConfigAction::Show, &style, &mut shown).unwrap();
    assert!(String::from_utf8(shown).unwrap().contains("base_url = \"http://10.0.0.2:8080/\""));
}

#[test]
fn test_invalid_base_url_override() {
    let dir = TempDir::new().unwrap();
    let manager = config_manager(Some(dir.path().join("config.toml")));
    assert!(load_config(&manager, Some("not a url")).is_err());
}
