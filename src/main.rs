use anyhow::Context;
use landing_signup::adapters::HttpSignupClient;
use landing_signup::configuration::get_configuration;
use landing_signup::signup::{ConsoleForm, SignupSubmitter, SubmissionState};
use landing_signup::telemetry::{get_subscriber, init_subscriber};
use landing_signup::tracking::track_cta_click;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let configuration = get_configuration().context("Failed to read configuration")?;

    let subscriber = get_subscriber("landing-signup".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let timeout = configuration.signup.timeout();
    let client = HttpSignupClient::new(configuration.signup.base_url, timeout)
        .context("Failed to build the signup client")?;

    let email = std::env::args().nth(1).unwrap_or_default();

    track_cta_click(Some("signup-form"));

    let mut form = ConsoleForm::new(email);
    let mut submitter = SignupSubmitter::new(client);

    match submitter.submit(&mut form).await {
        SubmissionState::Succeeded => Ok(()),
        _ => std::process::exit(1),
    }
}
