//! Terminal implementations of the widget's host capabilities.

use std::io::{BufRead, Write};

use teztayor_storefront::checkout::HandoffError;
use teztayor_storefront::{FormField, Launcher, Notifier};
use url::Url;

/// Alerts and confirmations on a terminal.
///
/// Alerts are printed; confirmations read a `y`/`yes` answer from input.
/// With `assume_yes` every confirmation is accepted without reading.
pub struct TerminalNotifier<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> TerminalNotifier<R, W> {
    pub const fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Notifier for TerminalNotifier<R, W> {
    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}") {
            tracing::warn!("Failed to show alert: {e}");
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        if let Err(e) = write!(self.output, "{message} [y/N] ").and_then(|()| self.output.flush()) {
            tracing::warn!("Failed to show prompt: {e}");
            return false;
        }

        if self.assume_yes {
            let _ = writeln!(self.output, "y");
            return true;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!("Failed to read answer: {e}");
                false
            }
        }
    }

    fn focus(&mut self, field: FormField) {
        let flag = match field {
            FormField::Name => "--name",
            FormField::Phone => "--phone",
            FormField::Address => "--address",
        };
        let _ = writeln!(self.output, "Check {flag}");
    }
}

/// "Opens" hand-off links by printing them for the user to follow.
pub struct PrintLauncher<W> {
    output: W,
}

impl<W: Write> PrintLauncher<W> {
    pub const fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> Launcher for PrintLauncher<W> {
    fn launch(&mut self, url: &Url) -> Result<(), HandoffError> {
        writeln!(self.output, "{url}").map_err(|e| HandoffError::Launch(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn notifier(input: &str, assume_yes: bool) -> TerminalNotifier<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalNotifier::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), assume_yes)
    }

    #[test]
    fn test_confirm_reads_answers() {
        let mut n = notifier("y\nno\nYES\n\n", false);
        assert!(n.confirm("Clear the cart?"));
        assert!(!n.confirm("Clear the cart?"));
        assert!(n.confirm("Clear the cart?"));
        assert!(!n.confirm("Clear the cart?"));
        // Input exhausted counts as no.
        assert!(!n.confirm("Clear the cart?"));
    }

    #[test]
    fn test_assume_yes_skips_input() {
        let mut n = notifier("", true);
        assert!(n.confirm("Confirm order?"));
        let output = String::from_utf8(n.into_output()).unwrap();
        assert_eq!(output, "Confirm order? [y/N] y\n");
    }

    #[test]
    fn test_alert_and_focus() {
        let mut n = notifier("", false);
        n.alert("Phone must be 9 digits.");
        n.focus(FormField::Phone);
        let output = String::from_utf8(n.into_output()).unwrap();
        assert_eq!(output, "Phone must be 9 digits.\nCheck --phone\n");
    }

    #[test]
    fn test_print_launcher() {
        let mut launcher = PrintLauncher::new(Vec::new());
        let url = Url::parse("https://wa.me/992000000000?text=hi").unwrap();
        launcher.launch(&url).unwrap();
        assert_eq!(
            String::from_utf8(launcher.output).unwrap(),
            "https://wa.me/992000000000?text=hi\n"
        );
    }
}
