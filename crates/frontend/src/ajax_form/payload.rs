//! Request body for a form submission.

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// The control that triggered the submission.
///
/// Fetch-based submission loses the native submitter, so its pair is added to
/// the body by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitter {
    pub name: String,
    pub value: String,
}

impl Submitter {
    /// `None` for unnamed controls, which contribute nothing to the body.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            value: value.into(),
        })
    }
}

fn encode_component(text: &str) -> String {
    urlencoding::encode(text).replace("%20", "+")
}

/// `name=value&...` with form encoding (spaces as `+`).
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn build_body(fields: &[(String, String)], submitter: Option<&Submitter>) -> String {
    let submitter_pair = submitter.map(|s| (s.name.as_str(), s.value.as_str()));
    encode_pairs(
        fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .chain(submitter_pair),
    )
}

/// Id of the element that receives a form's response html.
pub fn response_slot_id(form_id: &str) -> Option<String> {
    if form_id.is_empty() {
        None
    } else {
        Some(format!("{}-html", form_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_body_with_submitter() {
        let submitter = Submitter::new("action", "save").unwrap();
        let body = build_body(&fields(&[("title", "Hello world"), ("qty", "2")]), Some(&submitter));
        assert_eq!(body, "title=Hello+world&qty=2&action=save");
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let body = build_body(&fields(&[("q", "a&b=c/d"), ("note", "ü")]), None);
        assert_eq!(body, "q=a%26b%3Dc%2Fd&note=%C3%BC");
    }

    #[test]
    fn test_unnamed_submitter_is_dropped() {
        assert_eq!(Submitter::new("", "Send"), None);
        assert_eq!(build_body(&[], None), "");
    }

    #[test]
    fn test_submitter_only() {
        let submitter = Submitter::new("delete", "").unwrap();
        assert_eq!(build_body(&[], Some(&submitter)), "delete=");
    }

    #[test]
    fn test_response_slot_id() {
        assert_eq!(response_slot_id("profile"), Some("profile-html".to_string()));
        assert_eq!(response_slot_id(""), None);
    }
}
