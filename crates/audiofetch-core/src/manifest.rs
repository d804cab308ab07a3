//! Built-in list of game sound effects.

use crate::error::BatchError;
use crate::task::Batch;

/// Output directory used when none is given on the command line.
pub const DEFAULT_OUTPUT_DIR: &str = "../assets/audio";

const PHASER_SFX: &str = "https://raw.githubusercontent.com/photonstorm/phaser-examples/master/examples/assets/audio/SoundEffects";

/// `(filename, url)` pairs, in download order.
pub fn builtin_pairs() -> Vec<(String, String)> {
    vec![
        ("hit.wav".into(), format!("{}/alien_death1.wav", PHASER_SFX)),
        ("break.wav".into(), format!("{}/squit.wav", PHASER_SFX)),
        ("powerup.wav".into(), format!("{}/key.wav", PHASER_SFX)),
        ("game_over.wav".into(), format!("{}/squit.wav", PHASER_SFX)),
        (
            "background.mp3".into(),
            "https://raw.githubusercontent.com/photonstorm/phaser-examples/master/examples/assets/audio/oedipus_wizball_highscore.mp3".into(),
        ),
    ]
}

pub fn builtin_batch() -> Result<Batch, BatchError> {
    Batch::from_pairs(builtin_pairs())
}
