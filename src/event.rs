/// User interaction with the page.
#[derive(Debug, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub enum Event {
    /// The form was submitted with the given raw input value.
    Submit { email: String },

    /// The preview button was clicked.
    Preview,
}

impl Event {
    /// Parses one line of terminal input.
    ///
    /// Lines starting with `{` or `"` are read as JSON events, `preview` clicks the preview button,
    /// `subscribe <email>` or any other text submits the form with that text as input. An empty
    /// line submits an empty input.
    pub fn parse_line(line: &str) -> Result<Self, serde_json::Error> {
        let line = line.trim();

        if line.starts_with(['{', '"']) {
            return serde_json::from_str(line);
        }

        let event = match line.split_once(char::is_whitespace) {
            _ if line.eq_ignore_ascii_case("preview") => Event::Preview,
            _ if line.eq_ignore_ascii_case("subscribe") => Event::Submit {
                email: String::new(),
            },
            Some((command, email)) if command.eq_ignore_ascii_case("subscribe") => Event::Submit {
                email: email.trim().to_string(),
            },
            _ => Event::Submit {
                email: line.to_string(),
            },
        };

        Ok(event)
    }
}
