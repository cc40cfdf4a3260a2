use dart_atlas_shared::session::GameSession;
use dioxus::prelude::*;

use crate::api;
use crate::components::dart_board::{DartBoard, SessionSignal, DART_ELEMENT_ID};
use crate::components::notice::{Notice, NoticePanel};
use crate::coords;
use crate::maps;
use crate::provider::{GoogleMapProvider, MAP_ELEMENT_ID};

#[derive(Debug, Clone, Copy, PartialEq)]
enum LoadState {
    Loading,
    Ready,
    Failed(Notice),
}

/// Load the credential, the map script and the map itself.
async fn boot() -> Result<GoogleMapProvider, Notice> {
    let config = api::load_config().await.map_err(|e| {
        tracing::error!(error = %e, "failed to load API key");
        Notice::for_config_error(&e)
    })?;
    let api_key = config
        .api_key()
        .map_err(|e| {
            tracing::error!(error = %e, "API key is not usable");
            Notice::for_config_error(&e)
        })?
        .to_string();

    let map_error = |e: dart_atlas_shared::error::MapLoadError| {
        tracing::error!(error = %e, "map failed to load");
        Notice::for_map_error(&e)
    };
    maps::load_script(&api_key).await.map_err(map_error)?;

    let element = coords::html_element(MAP_ELEMENT_ID).ok_or(Notice::MAP_UNAVAILABLE)?;
    let map = maps::create_map(&element, &config).map_err(map_error)?;
    maps::wait_for_idle(&map).await.map_err(map_error)?;

    Ok(GoogleMapProvider::new(map, api_key, config.language))
}

#[component]
pub fn Game() -> Element {
    let mut session: SessionSignal = use_signal(|| None);
    let mut load_state = use_signal(|| LoadState::Loading);

    use_future(move || async move {
        match boot().await {
            Ok(provider) => {
                let dart = coords::element_size(DART_ELEMENT_ID).unwrap_or(coords::DEFAULT_DART_SIZE);
                let mut game = GameSession::new(provider, dart);
                if game.ready() {
                    session.set(Some(game));
                    load_state.set(LoadState::Ready);
                } else {
                    load_state.set(LoadState::Failed(Notice::MAP_UNAVAILABLE));
                }
            }
            Err(notice) => load_state.set(LoadState::Failed(notice)),
        }
    });

    use_drop(move || {
        if let Some(game) = std::mem::take(&mut *session.write()) {
            game.teardown();
        }
    });

    let state = *load_state.read();
    let subtitle = match state {
        LoadState::Loading => "地図を読み込んでいます…",
        LoadState::Ready => "ダーツをドラッグして、地図の上で離してください。",
        LoadState::Failed(_) => "地図を利用できません。",
    };

    rsx! {
        div { class: "game",
            header { class: "title-bar",
                h1 { "Dart Atlas" }
                p { class: "subtitle", "{subtitle}" }
            }

            DartBoard { session: session }

            if let LoadState::Failed(notice) = state {
                NoticePanel { notice: notice }
            }
        }
    }
}
