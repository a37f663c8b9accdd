/// Rendering class for the inline message region, mirroring the form's
/// success/error styling states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// The surface the submitter drives: an email field, a submit control with an
/// idle label and a loading indicator, and an inline message region.
pub trait SignupForm {
    /// Current raw value of the email field.
    fn email_value(&self) -> String;

    /// Enter the busy presentation: disable the email field and the submit
    /// control, swap the idle label for the loading indicator.
    fn begin_busy(&mut self);

    /// Leave the busy presentation: re-enable both controls and restore the
    /// idle label. Must be safe to call on a form that never entered it.
    fn end_busy(&mut self);

    fn clear_email(&mut self);

    fn render_message(&mut self, text: &str, kind: MessageKind);
}

/// Terminal-backed form for the CLI driver: the email comes from the command
/// line and the message region is stdout/stderr.
pub struct ConsoleForm {
    email: String,
}

impl ConsoleForm {
    pub fn new(email: String) -> Self {
        Self { email }
    }
}

impl SignupForm for ConsoleForm {
    fn email_value(&self) -> String {
        self.email.clone()
    }

    fn begin_busy(&mut self) {}

    fn end_busy(&mut self) {}

    fn clear_email(&mut self) {
        self.email.clear();
    }

    fn render_message(&mut self, text: &str, kind: MessageKind) {
        match kind {
            MessageKind::Success => println!("{}", text),
            MessageKind::Error => eprintln!("{}", text),
        }
    }
}
