use std::path::Path;
use anyhow::{Context, Result};
use raylib::prelude::*;

/// A sound the widget can start and rewind.
pub trait AudioPlayer {
    /// Starts playback from the current position.
    fn play(&mut self);
    /// Pauses playback and moves back to time zero.
    fn rewind(&mut self);
}

impl AudioPlayer for Sound<'_> {
    fn play(&mut self) {
        Sound::play(self);
    }

    // raylib's stop() both halts the sound and resets its cursor
    fn rewind(&mut self) {
        Sound::stop(self);
    }
}

// A missing sound stays silent, the visuals keep working
impl<P: AudioPlayer> AudioPlayer for Option<P> {
    fn play(&mut self) {
        if let Some(player) = self {
            player.play();
        }
    }

    fn rewind(&mut self) {
        if let Some(player) = self {
            player.rewind();
        }
    }
}

pub fn init_audio_device() -> Option<RaylibAudio> {
    match RaylibAudio::init_audio_device() {
        Ok(audio) => {
            let ready = audio.is_audio_device_ready();
            keep_if_ready(audio, ready)
        }
        Err(e) => {
            log::warn!("Audio device unavailable, running silent: {:?}", e);
            None
        }
    }
}

// raylib hands back a handle even when the device failed to open
fn keep_if_ready<D>(device: D, ready: bool) -> Option<D> {
    if ready {
        Some(device)
    } else {
        log::warn!("Audio device failed to open, running silent");
        None
    }
}

fn load_sound<'aud>(audio: &'aud RaylibAudio, path: &Path) -> Result<Sound<'aud>> {
    let path_str = path
        .to_str()
        .with_context(|| format!("Sound path is not valid UTF-8: {:?}", path))?;
    audio
        .new_sound(path_str)
        .map_err(|e| anyhow::anyhow!("Failed to load sound {:?}: {}", path, e))
}

/// Loads a sound, degrading to silence when the device or the file is unavailable.
pub fn load_sound_or_silence<'aud>(audio: Option<&'aud RaylibAudio>, path: &Path) -> Option<Sound<'aud>> {
    let audio = audio?;
    match load_sound(audio, path) {
        Ok(sound) => Some(sound),
        Err(e) => {
            log::warn!("{:#}", e);
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{AudioCall, RecordingPlayer};
    use super::{keep_if_ready, AudioPlayer};

    #[test]
    fn test_device_that_failed_to_open_is_dropped() {
        assert_eq!(keep_if_ready("device", false), None);
        assert_eq!(keep_if_ready("device", true), Some("device"));
    }

    #[test]
    fn test_some_player_forwards_calls() {
        let (intro, _bam, log) = RecordingPlayer::pair();
        let mut player = Some(intro);
        player.rewind();
        player.play();
        assert_eq!(*log.borrow(), vec![AudioCall::Rewind("intro"), AudioCall::Play("intro")]);
    }

    #[test]
    fn test_missing_player_is_silent() {
        let mut player: Option<RecordingPlayer> = None;
        player.rewind();
        player.play();
        assert!(player.is_none());
    }
}
