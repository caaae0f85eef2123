//! Play command handler

use anyhow::Result;

use srtsync::cli::PlayArgs;
use srtsync::player::{play_session, PlayOptions, PlaybackResult};
use srtsync::theme::current_theme;
use srtsync::Config;

/// Merge flags over the config file.
fn build_options(args: PlayArgs, config: &Config) -> PlayOptions {
    let interval = match args.interval_ms {
        Some(ms) => std::time::Duration::from_millis(ms.max(10)),
        None => config.player.interval(),
    };

    PlayOptions {
        subtitles: args.subtitles,
        audio: args.audio,
        interval,
        seek_step: config.player.seek_step_secs,
        speed: args.speed.unwrap_or(config.player.speed),
        show_end_times: config.ui.show_end_times,
        theme: config.ui.theme(),
    }
}

/// Open the player.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    let config = Config::load()?;
    let options = build_options(args, &config);

    if options.audio.is_none() {
        tracing::info!("no audio given, opening transcript only");
    }

    match play_session(&options)? {
        PlaybackResult::Finished => {}
        PlaybackResult::Interrupted => {
            let theme = current_theme();
            println!("{}", theme.secondary_text("Stopped by user"));
        }
    }
    Ok(())
}
