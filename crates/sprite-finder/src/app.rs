//! The two run modes: headless browsing and sprite cutting.

use std::error::Error;

use c64_raster::palette::colour_name;
use c64_raster::snapshot::{SPRITE_INDEX_MASK, sprite_address};
use c64_raster::{Framebuffer, Palette, Scene, Session, Snapshot, SpriteCut, SpriteMode};
use log::{debug, info};

use crate::config::CliArgs;
use crate::export::{sprite_name, to_c_array};
use crate::input::{InputQueue, command_for_key, parse_keys};
use crate::state::load_session;

/// Pixel value the outline pass writes into a cut.
const OUTLINE_VALUE: u8 = 4;

/// Session to start from: `--state`, then `--hires`/`--sprite`/`--offset`.
pub fn initial_session(cli: &CliArgs) -> Result<Session, Box<dyn Error>> {
    let mut session = match cli.state {
        Some(ref path) => load_session(path)?,
        None => Session::default(),
    };
    if cli.hires {
        session.mode = SpriteMode::HiRes;
    }
    if let Some(sprite) = cli.sprite {
        session.sprite_index = sprite & SPRITE_INDEX_MASK;
    }
    if let Some(offset) = cli.offset {
        session.offset = offset;
    }
    Ok(session)
}

/// One-line summary of a session for the log.
#[must_use]
pub fn describe_session(session: &Session) -> String {
    let [bg, fg0, fg1, fg2] = session.colours();
    format!(
        "sprite {} offset {} ({:?}), bg {}, fg {} / {} / {}",
        session.sprite_index,
        session.offset,
        session.mode,
        colour_name(bg),
        colour_name(fg0),
        colour_name(fg1),
        colour_name(fg2),
    )
}

/// Run the browser for `cli.frames` frames, feeding scripted keys.
///
/// Returns the last composed frame. Escape ends the run before the frame
/// it arrives on is drawn.
pub fn run_browser(cli: &CliArgs, scene: &Scene, session: &mut Session) -> Framebuffer {
    let mut fb = Scene::framebuffer();
    let mut queue = InputQueue::new();
    if let Some(ref keys) = cli.keys {
        queue.enqueue_keys(&parse_keys(keys), cli.keys_at);
    }

    for frame in 0..cli.frames {
        let mut running = true;
        for key in queue.take_due(frame) {
            match command_for_key(key) {
                Some(command) => {
                    debug!("frame {frame}: key {key:#04x} -> {command:?}");
                    running &= session.apply(command);
                }
                None => debug!("frame {frame}: key {key:#04x} ignored"),
            }
            if !running {
                break;
            }
        }
        if !running {
            info!("Quit at frame {frame}");
            break;
        }
        scene.compose(&mut fb, session);
    }

    fb
}

/// Cut `cli.cut_count` sprites starting at `first` and render each as a
/// C array.
#[must_use]
pub fn cut_sprites(cli: &CliArgs, first: u16, snapshot: &Snapshot, session: &Session) -> Vec<String> {
    let palette = Palette::default();
    let [bg, fg0, fg1, fg2] = session.colours();
    let table = [bg, fg0, fg1, fg2, cli.outline.unwrap_or(0)];

    (0..cli.cut_count)
        .map(|n| {
            let number = first.wrapping_add(n) & SPRITE_INDEX_MASK;
            let data = snapshot.sprite_at(sprite_address(session.offset, number));
            let mut cut = SpriteCut::cut(&data, session.mode, cli.cut_scale);
            if cli.outline.is_some() {
                cut.outline(OUTLINE_VALUE);
            }
            if cli.mirror_h {
                cut.mirror_horizontal();
            }
            if cli.mirror_v {
                cut.mirror_vertical();
            }
            if let Some(rotation) = cli.rotate {
                cut.rotate(rotation);
            }
            let name = sprite_name(&cli.snapshot, number);
            debug!("cut {name}: {0}x{0}", cut.size());
            to_c_array(&cut, &name, &palette, &table)
        })
        .collect()
}
