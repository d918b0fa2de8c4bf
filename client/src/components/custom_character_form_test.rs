use super::*;

#[test]
fn validate_trims_inputs() {
    assert_eq!(
        validate("  Mascot ", " https://img/m.png "),
        Ok(("Mascot".to_owned(), "https://img/m.png".to_owned()))
    );
}

#[test]
fn validate_accepts_uploaded_data_urls() {
    assert!(validate("Mascot", "data:image/png;base64,AAAA").is_ok());
}

#[test]
fn validate_requires_name_and_image() {
    assert_eq!(validate(" ", "https://img/m.png"), Err("Give the character a name."));
    assert_eq!(validate("Mascot", ""), Err("Choose an image or paste an image URL."));
}

#[test]
fn validate_rejects_other_schemes() {
    assert!(validate("Mascot", "javascript:alert(1)").is_err());
    assert!(validate("Mascot", "data:text/html,hi").is_err());
}
