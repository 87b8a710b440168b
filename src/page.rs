//! The elements of the landing page the runtime reads and writes.

use std::io::Write;

use colored::Colorize;

use crate::konst::ERROR_COLOR;
use crate::konst::SUBMIT_LABEL;
use crate::konst::SUCCESS_COLOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn css_color(self) -> &'static str {
        match self {
            Tone::Success => SUCCESS_COLOR,
            Tone::Error => ERROR_COLOR,
        }
    }
}

/// Page-side collaborator. Implementations own the actual output, components only ever
/// talk to the page through this trait.
pub trait Page {
    fn set_date_text(&mut self, text: &str);
    fn set_greeting_text(&mut self, text: &str);
    fn set_time_text(&mut self, text: &str);

    fn set_slide_active(&mut self, index: usize, active: bool);

    /// An empty text clears the message area.
    fn set_message(&mut self, text: &str, tone: Option<Tone>);

    /// Clears the email input.
    fn reset_form(&mut self);

    fn set_submit_button(&mut self, enabled: bool, label: &str);

    fn open_in_new_context(&mut self, url: &url::Url);
}

/// Renders the page as a single status line that is redrawn on every change.
pub struct TerminalPage<W: Write> {
    out: W,
    date: String,
    greeting: String,
    time: String,
    slides: Vec<String>,
    active: Vec<bool>,
    message: String,
    tone: Option<Tone>,
    button_enabled: bool,
    button_label: String,
}

impl<W: Write> TerminalPage<W> {
    pub fn new(out: W, slides: Vec<String>) -> Self {
        let active = vec![false; slides.len()];
        Self {
            out,
            date: String::new(),
            greeting: String::new(),
            time: String::new(),
            slides,
            active,
            message: String::new(),
            tone: None,
            button_enabled: true,
            button_label: SUBMIT_LABEL.to_string(),
        }
    }

    fn status_line(&self) -> String {
        let slide = self
            .active
            .iter()
            .position(|active| *active)
            .and_then(|index| self.slides.get(index))
            .map(String::as_str)
            .unwrap_or("-");

        let button = if self.button_enabled {
            format!("[{}]", self.button_label)
        } else {
            format!("({})", self.button_label)
        };

        let message = match self.tone {
            _ if self.message.is_empty() => String::new(),
            Some(Tone::Success) => self.message.bright_green().to_string(),
            Some(Tone::Error) => self.message.bright_red().to_string(),
            None => self.message.clone(),
        };

        format!(
            "{date} | {greeting} {time} | {slide} | {button} {message}",
            date = self.date,
            greeting = self.greeting,
            time = self.time,
        )
    }

    fn redraw(&mut self) {
        let line = self.status_line();
        let result = write!(self.out, "\r\x1b[2K{line}").and_then(|()| self.out.flush());
        if let Err(error) = result {
            tracing::warn!(?error, "Failed to redraw page");
        }
    }

    fn print_above(&mut self, text: &str) {
        let line = self.status_line();
        let result = write!(self.out, "\r\x1b[2K{text}\n{line}").and_then(|()| self.out.flush());
        if let Err(error) = result {
            tracing::warn!(?error, "Failed to write to page");
        }
    }
}

impl<W: Write> Page for TerminalPage<W> {
    fn set_date_text(&mut self, text: &str) {
        text.clone_into(&mut self.date);
        self.redraw();
    }

    fn set_greeting_text(&mut self, text: &str) {
        text.clone_into(&mut self.greeting);
        self.redraw();
    }

    fn set_time_text(&mut self, text: &str) {
        text.clone_into(&mut self.time);
        self.redraw();
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        let Some(marker) = self.active.get_mut(index) else {
            tracing::warn!(index, "No slide at index");
            return;
        };
        *marker = active;
        self.redraw();
    }

    fn set_message(&mut self, text: &str, tone: Option<Tone>) {
        tracing::debug!(text, color = ?tone.map(Tone::css_color), "Message updated");
        text.clone_into(&mut self.message);
        self.tone = tone;
        self.redraw();
    }

    fn reset_form(&mut self) {
        tracing::debug!("Email input cleared");
    }

    fn set_submit_button(&mut self, enabled: bool, label: &str) {
        self.button_enabled = enabled;
        label.clone_into(&mut self.button_label);
        self.redraw();
    }

    fn open_in_new_context(&mut self, url: &url::Url) {
        tracing::info!(%url, "Opening preview");
        self.print_above(&format!("preview: {url}"));
    }
}

impl<W: Write> Drop for TerminalPage<W> {
    fn drop(&mut self) {
        // leave the status line in place
        let _ = writeln!(self.out);
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Page;
    use super::Tone;

    /// Keeps the last value written to every element.
    #[derive(Debug)]
    pub struct RecordingPage {
        pub date: String,
        pub greeting: String,
        pub time: String,
        pub active: Vec<bool>,
        pub message: String,
        pub tone: Option<Tone>,
        pub form_resets: usize,
        pub button_enabled: bool,
        pub button_label: String,
        pub opened: Vec<url::Url>,
    }

    impl RecordingPage {
        pub fn with_slides(count: usize) -> Self {
            Self {
                date: String::new(),
                greeting: String::new(),
                time: String::new(),
                active: vec![false; count],
                message: String::new(),
                tone: None,
                form_resets: 0,
                button_enabled: true,
                button_label: crate::konst::SUBMIT_LABEL.to_string(),
                opened: Vec::new(),
            }
        }

        pub fn active_indices(&self) -> Vec<usize> {
            self.active
                .iter()
                .enumerate()
                .filter_map(|(index, active)| active.then_some(index))
                .collect()
        }
    }

    impl Page for RecordingPage {
        fn set_date_text(&mut self, text: &str) {
            self.date = text.to_string();
        }

        fn set_greeting_text(&mut self, text: &str) {
            self.greeting = text.to_string();
        }

        fn set_time_text(&mut self, text: &str) {
            self.time = text.to_string();
        }

        fn set_slide_active(&mut self, index: usize, active: bool) {
            self.active[index] = active;
        }

        fn set_message(&mut self, text: &str, tone: Option<Tone>) {
            self.message = text.to_string();
            self.tone = tone;
        }

        fn reset_form(&mut self) {
            self.form_resets += 1;
        }

        fn set_submit_button(&mut self, enabled: bool, label: &str) {
            self.button_enabled = enabled;
            self.button_label = label.to_string();
        }

        fn open_in_new_context(&mut self, url: &url::Url) {
            self.opened.push(url.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(page: TerminalPage<Vec<u8>>) -> String {
        let line = page.status_line();
        drop(page);
        line
    }

    #[test]
    fn test_status_line_shows_active_slide() {
        let mut page = TerminalPage::new(Vec::new(), vec!["a.jpg".into(), "b.jpg".into()]);
        page.set_date_text("JULY 4, 2025 - FRIDAY");
        page.set_greeting_text("GOOD AFTERNOON!");
        page.set_time_text("12:05 PM");
        page.set_slide_active(1, true);

        assert_eq!(
            rendered(page),
            "JULY 4, 2025 - FRIDAY | GOOD AFTERNOON! 12:05 PM | b.jpg | [SUBSCRIBE] "
        );
    }

    #[test]
    fn test_disabled_button_is_parenthesized() {
        let mut page = TerminalPage::new(Vec::new(), Vec::new());
        page.set_submit_button(false, "SUBSCRIBING...");

        assert_eq!(rendered(page), " |   | - | (SUBSCRIBING...) ");
    }

    #[test]
    fn test_out_of_range_slide_is_ignored() {
        let mut page = TerminalPage::new(Vec::new(), vec!["a.jpg".into()]);
        page.set_slide_active(3, true);
        assert_eq!(page.active, vec![false]);
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(Tone::Success.css_color(), "#39FF14");
        assert_eq!(Tone::Error.css_color(), "#ff1616");
    }

    #[test]
    fn test_colored_message_is_written() {
        colored::control::set_override(true);

        let mut out = Vec::new();
        {
            let mut page = TerminalPage::new(&mut out, vec!["a.jpg".into()]);
            page.set_message("Thank you for subscribing!", Some(Tone::Success));
            page.set_message("Please enter your email.", Some(Tone::Error));
            page.set_message("", None);
        }

        insta::assert_debug_snapshot!(String::from_utf8(out).unwrap(), @r#""\r\u{1b}[2K |   | - | [SUBSCRIBE] \u{1b}[92mThank you for subscribing!\u{1b}[0m\r\u{1b}[2K |   | - | [SUBSCRIBE] \u{1b}[91mPlease enter your email.\u{1b}[0m\r\u{1b}[2K |   | - | [SUBSCRIBE] \n""#);
    }

    #[test]
    fn test_preview_line_is_printed_above_status() {
        let mut out = Vec::new();
        {
            let mut page = TerminalPage::new(&mut out, vec!["a.jpg".into()]);
            page.set_slide_active(0, true);
            page.open_in_new_context(&"https://example.com/preview".parse().unwrap());
        }

        insta::assert_debug_snapshot!(String::from_utf8(out).unwrap(), @r#""\r\u{1b}[2K |   | a.jpg | [SUBSCRIBE] \r\u{1b}[2Kpreview: https://example.com/preview\n |   | a.jpg | [SUBSCRIBE] \n""#);
    }

    #[test]
    fn test_drop_ends_status_line() {
        let mut out = Vec::new();
        drop(TerminalPage::new(&mut out, Vec::new()));
        assert_eq!(out, b"\n");
    }
}
