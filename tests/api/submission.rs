use crate::helpers::{spawn_app, FakeForm};
use landing_signup::adapters::{http_signup_client::SIGNUP_PATH, HttpSignupClient};
use landing_signup::domain::signup_email::EMPTY_EMAIL_MESSAGE;
use landing_signup::signup::{MessageKind, SignupSubmitter, SubmissionState, SUCCESS_MESSAGE};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_valid_email_issues_exactly_one_trimmed_json_post() {
    // Arrange
    let mut app = spawn_app().await;

    Mock::given(path(SIGNUP_PATH))
        .and(method("POST"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({ "email": "ursula@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.signup_server)
        .await;

    let mut form = FakeForm::with_email("  ursula@example.com  ");

    // Act
    let state = app.submit(&mut form).await;

    // Assert
    assert_eq!(state, SubmissionState::Succeeded);
}

#[tokio::test]
async fn a_successful_signup_clears_the_field_and_shows_the_success_copy() {
    // Arrange
    let mut app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.signup_server)
        .await;

    let mut form = FakeForm::with_email("ursula@example.com");

    // Act
    app.submit(&mut form).await;

    // Assert
    assert_eq!(form.email, "");
    assert_eq!(
        form.last_message(),
        &(SUCCESS_MESSAGE.to_string(), MessageKind::Success)
    );
}

#[tokio::test]
async fn empty_or_whitespace_emails_never_reach_the_network() {
    // Arrange
    let mut app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.signup_server)
        .await;

    let test_cases = vec![("", "empty field"), ("   ", "spaces"), ("\t\n", "tabs")];

    for (input, description) in test_cases {
        let mut form = FakeForm::with_email(input);

        // Act
        let state = app.submit(&mut form).await;

        // Assert
        assert_eq!(
            state,
            SubmissionState::Failed,
            "Submission did not fail when the field held {}",
            description
        );
        assert_eq!(
            form.last_message(),
            &(EMPTY_EMAIL_MESSAGE.to_string(), MessageKind::Error)
        );
        assert!(!form.busy, "The form stayed disabled after {}", description);
    }
}

#[tokio::test]
async fn a_rejection_with_a_message_body_surfaces_that_message() {
    // Arrange
    let mut app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(
            serde_json::json!({ "message": "That address is already on the list." }),
        ))
        .mount(&app.signup_server)
        .await;

    let mut form = FakeForm::with_email("ursula@example.com");

    // Act
    let state = app.submit(&mut form).await;

    // Assert
    assert_eq!(state, SubmissionState::Failed);
    assert_eq!(
        form.last_message(),
        &(
            "That address is already on the list.".to_string(),
            MessageKind::Error
        )
    );
}

#[tokio::test]
async fn a_rejection_without_a_message_body_falls_back_to_generic_copy() {
    // Arrange
    let mut app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.signup_server)
        .await;

    let mut form = FakeForm::with_email("ursula@example.com");

    // Act
    let state = app.submit(&mut form).await;

    // Assert
    assert_eq!(state, SubmissionState::Failed);
    assert_eq!(
        form.last_message(),
        &(
            "Something went wrong. Please try again.".to_string(),
            MessageKind::Error
        )
    );
}

#[tokio::test]
async fn an_unreachable_endpoint_surfaces_the_connection_error_copy() {
    // Arrange
    // Reserve a port, then release it so the request has nothing to connect to
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind a throwaway port");
    let address = listener.local_addr().expect("Failed to read the local address");
    drop(listener);
    let uri = format!("http://{}", address);

    let client = HttpSignupClient::new(uri, Duration::from_millis(500))
        .expect("Failed to build the signup client");
    let mut submitter = SignupSubmitter::new(client);
    let mut form = FakeForm::with_email("ursula@example.com");

    // Act
    let state = submitter.submit(&mut form).await;

    // Assert
    assert_eq!(state, SubmissionState::Failed);
    assert_eq!(
        form.last_message(),
        &(
            "Connection error. Please try again later.".to_string(),
            MessageKind::Error
        )
    );
}

#[tokio::test]
async fn every_cycle_hands_the_form_back_interactive() {
    // Arrange
    let mut app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&app.signup_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.signup_server)
        .await;

    for _ in 0..2 {
        let mut form = FakeForm::with_email("ursula@example.com");

        // Act
        app.submit(&mut form).await;

        // Assert
        assert_eq!(form.busy_transitions, vec![true, false]);
        assert!(!form.busy);
    }
}

#[tokio::test]
async fn a_failed_cycle_leaves_the_submitter_reusable() {
    // Arrange
    let mut app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&app.signup_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.signup_server)
        .await;

    let mut form = FakeForm::with_email("ursula@example.com");

    // Act
    let first = app.submit(&mut form).await;
    form.email = "ursula@example.com".to_string();
    let second = app.submit(&mut form).await;

    // Assert
    assert_eq!(first, SubmissionState::Failed);
    assert_eq!(second, SubmissionState::Succeeded);
    assert_eq!(app.submitter.state(), SubmissionState::Succeeded);
}
