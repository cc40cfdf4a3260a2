use dart_atlas_shared::error::{ConfigError, MapLoadError};
use dioxus::prelude::*;

/// A persistent message shown instead of a playable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Notice {
    pub title: &'static str,
    pub body: &'static str,
}

impl Notice {
    pub const MISSING_KEY: Notice = Notice {
        title: "APIキーが設定されていません",
        body: "secrets.json に Maps_API_KEY を設定してから、ページを再読み込みしてください。",
    };

    pub const INVALID_KEY: Notice = Notice {
        title: "APIキーが不正です",
        body: "入力されたAPIキーで地図を読み込めませんでした。APIキーを確認して、再度お試しください。",
    };

    pub const MAP_UNAVAILABLE: Notice = Notice {
        title: "地図を表示できません",
        body: "地図の初期化に失敗しました。ページを再読み込みしてください。",
    };

    /// Every config problem means the same thing to the player: no usable key.
    pub fn for_config_error(_err: &ConfigError) -> Self {
        Self::MISSING_KEY
    }

    pub fn for_map_error(err: &MapLoadError) -> Self {
        match err {
            MapLoadError::Script(_) => Self::INVALID_KEY,
            MapLoadError::NotInitialized => Self::MAP_UNAVAILABLE,
        }
    }
}

#[component]
pub fn NoticePanel(notice: Notice) -> Element {
    rsx! {
        div { class: "notice active",
            div { class: "notice-card",
                h2 { "{notice.title}" }
                p { "{notice.body}" }
                button {
                    onclick: move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    },
                    "再読み込み"
                }
            }
        }
    }
}
