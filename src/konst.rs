pub(crate) const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "SUNDAY",
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];

pub(crate) const SUCCESS_COLOR: &str = "#39FF14";

pub(crate) const ERROR_COLOR: &str = "#ff1616";

pub(crate) const EMPTY_EMAIL_MESSAGE: &str = "Please enter your email.";

pub(crate) const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing!";

pub(crate) const REJECTED_FALLBACK_MESSAGE: &str = "Subscription failed. Please try again.";

pub(crate) const CONNECT_FAILED_MESSAGE: &str = "Could not connect. Please try again later.";

pub(crate) const SUBMIT_LABEL: &str = "SUBSCRIBE";

pub(crate) const SUBMITTING_LABEL: &str = "SUBSCRIBING...";

pub(crate) const SUBSCRIBED_LABEL: &str = "SUBSCRIBED ✓";

/// Always sent along with the email, the endpoint mails the latest issue right away.
pub(crate) const SEND_FIRST_ISSUE: &str = "true";
