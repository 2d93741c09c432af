//! vCard 3.0 contact card offered as a download.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub given_name: String,
    pub family_name: String,
    pub title: Option<String>,
    pub org: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
}

/// Escape a property value: backslash, comma, semicolon and newlines.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// URI values keep `,` and `;` literal but can never span lines.
pub fn uri_value(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

impl Contact {
    pub fn full_name(&self) -> String {
        match (self.given_name.is_empty(), self.family_name.is_empty()) {
            (false, false) => format!("{} {}", self.given_name, self.family_name),
            (false, true) => self.given_name.clone(),
            _ => self.family_name.clone(),
        }
    }

    /// Card text with CRLF line endings, as vCard requires.
    pub fn to_vcard(&self) -> String {
        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!(
                "N:{};{};;;",
                escape(&self.family_name),
                escape(&self.given_name)
            ),
            format!("FN:{}", escape(&self.full_name())),
        ];
        if let Some(org) = &self.org {
            lines.push(format!("ORG:{}", escape(org)));
        }
        if let Some(title) = &self.title {
            lines.push(format!("TITLE:{}", escape(title)));
        }
        if let Some(email) = &self.email {
            lines.push(format!("EMAIL;TYPE=INTERNET:{}", escape(email)));
        }
        if let Some(url) = &self.url {
            lines.push(format!("URL:{}", uri_value(url)));
        }
        lines.push("END:VCARD".to_string());
        let mut card = lines.join("\r\n");
        card.push_str("\r\n");
        card
    }

    /// Download name such as `jane-doe.vcf`.
    pub fn file_name(&self) -> String {
        let slug: String = self
            .full_name()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        let slug = slug
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        if slug.is_empty() {
            "contact.vcf".to_string()
        } else {
            format!("{slug}.vcf")
        }
    }
}
