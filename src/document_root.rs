//! Bridge from Rust state to the webview document.

use portfolio_core::ClassList;
use portfolio_ui::{js_string, run_script};

/// The `<html>` element
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

fn class_list_script(method: &str, class: &str) -> String {
    format!(
        "document.documentElement.classList.{}({});",
        method,
        js_string(class)
    )
}

impl ClassList for DocumentRoot {
    fn add_class(&mut self, class: &str) {
        run_script(class_list_script("add", class));
    }

    fn remove_class(&mut self, class: &str) {
        run_script(class_list_script("remove", class));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_scripts() {
        assert_eq!(
            class_list_script("add", "dark"),
            "document.documentElement.classList.add(\"dark\");"
        );
        assert_eq!(
            class_list_script("remove", "light"),
            "document.documentElement.classList.remove(\"light\");"
        );
    }

    #[test]
    fn class_names_are_quoted() {
        assert_eq!(
            class_list_script("add", "a\"b"),
            r#"document.documentElement.classList.add("a\"b");"#
        );
    }
}
