use std::path::PathBuf;

use clap::Parser;

use crate::ui::settings::ScreenId;

#[derive(Debug, Parser)]
#[command(
    name = "playdeck",
    version,
    about = "Terminal music player settings and now-playing shell"
)]
pub struct Cli {
    /// Config file (default: platform config dir/playdeck/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep settings in memory only; nothing is written to disk.
    #[arg(long, conflicts_with = "config")]
    pub ephemeral: bool,

    /// Screen to open first.
    #[arg(long, value_enum, default_value_t = ScreenId::Root)]
    pub screen: ScreenId,

    /// Log file (default: platform data dir/playdeck/playdeck.log).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Upper caption of the now-playing header.
    #[arg(long, default_value = "Playing from library")]
    pub now_playing_title: String,

    /// Lower caption of the now-playing header.
    #[arg(long, default_value = "Nothing playing")]
    pub now_playing_state: String,
}
