//! Dashboard page header.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Page title
    pub title: String,
    /// One-line description under the title
    #[props(default = String::new())]
    pub description: String,
    /// Decorative line above the title
    #[props(default = String::new())]
    pub emoji: String,
}

/// Header banner with title and optional description.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div {
            class: "header",
            style: "background: #222222; color: #FFFFFF; padding: 24px 16px; text-align: center; border-radius: 4px; margin-bottom: 12px;",
            if !props.emoji.is_empty() {
                p {
                    class: "header-emoji",
                    style: "font-size: 40px; margin: 0;",
                    "{props.emoji}"
                }
            }
            h1 {
                class: "header-title",
                style: "margin: 8px 0; font-size: 36px; font-weight: bold;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    class: "header-description",
                    style: "margin: 0; color: #CFCFCF;",
                    "{props.description}"
                }
            }
        }
    }
}
