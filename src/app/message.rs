// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery;
use crate::media::RemoteImage;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// A download started by the application finished.
    ImageFetched {
        url: String,
        result: Result<RemoteImage, Error>,
    },
    /// Hides the startup warning banner.
    DismissNotice,
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// i18n key of the warning raised while loading the catalog.
    pub catalog_warning: Option<String>,
    /// Optional layout override taking precedence over `[gallery] layout`.
    pub layout: Option<gallery::Layout>,
    /// Optional data directory override (for the session file).
    /// Takes precedence over `VIEWING_ROOM_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VIEWING_ROOM_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
