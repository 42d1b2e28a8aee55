// Contact form submissions open the visitor's mail client addressed here
pub const CONTACT_RECIPIENT: &str = "your.email@example.com";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// `mailto:` href for this message. Only the body text goes through
    /// `encode` (a URI-component encoder); subject and sender are inserted
    /// as typed, matching what mail clients accept from the page today.
    pub fn mailto_href(&self, recipient: &str, encode: impl Fn(&str) -> String) -> String {
        format!(
            "mailto:{recipient}?subject=Contact from {}&body={}%0A%0AFrom: {}",
            self.name,
            encode(&self.message),
            self.email
        )
    }
}
