//! Image card view model
//!
//! 背景图卡片：图片 + 标题/副标题 + 可选的编辑/删除菜单。
//! 卡片是否包一层可导航链接由 [`choose_wrapper`] 决定。

use serde::Serialize;

use crate::db::models::Image;

/// How the card content should be wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapperKind {
    /// Plain card, not navigable
    None,
    /// Card content wrapped in a link to `href`
    Link,
}

/// Decide whether card content gets a navigable wrapper
///
/// A link is rendered only when a target path exists AND the contextual
/// action menu is not mid-operation. Navigating away while a delete/edit
/// request is in flight would race against it.
pub fn choose_wrapper(has_href: bool, loading: bool) -> WrapperKind {
    if has_href && !loading {
        WrapperKind::Link
    } else {
        WrapperKind::None
    }
}

/// Configuration for the contextual edit/delete menu on a card
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditDeleteOptions {
    /// True while a destructive action is in flight
    pub loading: bool,
    /// Icon color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Card item with an image as its background
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageCard {
    /// Image to be displayed in the card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Alt text of the image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    /// Title of the card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Subtitle of the card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    /// Path that needs to be opened when clicked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Whether the link opens in the same tab or a new one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Contextual edit/delete menu (shown only when supplied)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_delete_options: Option<EditDeleteOptions>,
}

impl ImageCard {
    /// Apply the link guard to this card's configuration
    pub fn wrapper(&self) -> WrapperKind {
        let loading = self
            .edit_delete_options
            .as_ref()
            .is_some_and(|opts| opts.loading);
        choose_wrapper(self.href.is_some(), loading)
    }

    /// Finalize into a serializable view with the wrapper decision applied
    pub fn into_view(self) -> ImageCardView {
        ImageCardView {
            wrapper: self.wrapper(),
            card: self,
        }
    }
}

/// Fully derived card view, ready to serialize for clients
#[derive(Debug, Clone, Serialize)]
pub struct ImageCardView {
    #[serde(flatten)]
    pub card: ImageCard,
    pub wrapper: WrapperKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_requires_href() {
        assert_eq!(choose_wrapper(false, false), WrapperKind::None);
        assert_eq!(choose_wrapper(false, true), WrapperKind::None);
    }

    #[test]
    fn test_wrapper_blocked_while_loading() {
        assert_eq!(choose_wrapper(true, true), WrapperKind::None);
    }

    #[test]
    fn test_wrapper_link_when_idle() {
        assert_eq!(choose_wrapper(true, false), WrapperKind::Link);
    }

    #[test]
    fn test_card_with_href_and_idle_options_is_link() {
        let card = ImageCard {
            title: Some("Sea Breeze".to_string()),
            href: Some("/restaurant/abc/menu".to_string()),
            edit_delete_options: Some(EditDeleteOptions {
                loading: false,
                color: None,
            }),
            ..Default::default()
        };
        assert_eq!(card.wrapper(), WrapperKind::Link);
    }

    #[test]
    fn test_card_with_href_but_loading_is_not_link() {
        let card = ImageCard {
            href: Some("/restaurant/abc/menu".to_string()),
            edit_delete_options: Some(EditDeleteOptions {
                loading: true,
                color: None,
            }),
            ..Default::default()
        };
        assert_eq!(card.wrapper(), WrapperKind::None);
    }

    #[test]
    fn test_card_without_options_defaults_to_not_loading() {
        let card = ImageCard {
            href: Some("/somewhere".to_string()),
            ..Default::default()
        };
        assert_eq!(card.into_view().wrapper, WrapperKind::Link);
    }
}
