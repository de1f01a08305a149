pub const APP_NAME: &str = "House Price Explainer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Version shown in the footer; prefers the git tag captured at build time.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_never_empty() {
        let label = version_label();
        assert!(!label.is_empty());
        if GIT_TAG.is_none() {
            assert_eq!(label, format!("v{APP_VERSION}"));
        }
    }
}
