//! Sprite finder binary.

use std::process;

use c64_raster::{Palette, Scene};
use env_logger::Env;
use log::{error, info};
use sprite_finder::app::{cut_sprites, describe_session, initial_session, run_browser};
use sprite_finder::assets::{default_font_path, load_glyphs, load_snapshot};
use sprite_finder::capture::save_screenshot;
use sprite_finder::config::{CliArgs, USAGE};
use sprite_finder::state::save_session;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };
    if cli.help {
        println!("{USAGE}");
        return;
    }

    let snapshot = load_snapshot(&cli.snapshot).unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });
    let mut session = initial_session(&cli).unwrap_or_else(|e| {
        error!("Cannot load session: {e}");
        process::exit(1);
    });

    if let Some(first) = cli.cut {
        for array in cut_sprites(&cli, first, &snapshot, &session) {
            println!("{array}");
        }
        return;
    }

    let font = cli.font.clone().unwrap_or_else(default_font_path);
    let glyphs = load_glyphs(&font).unwrap_or_else(|e| {
        error!("{e}");
        error!("Place the C64 character ROM at roms/chargen.rom (4096 bytes) or pass --font");
        process::exit(1);
    });

    let scene = Scene::new(Palette::default(), glyphs, snapshot);
    let fb = run_browser(&cli, &scene, &mut session);
    info!("Done: {}", describe_session(&session));

    if let Some(ref path) = cli.screenshot {
        if let Err(e) = save_screenshot(&fb, path) {
            error!("Screenshot error: {e}");
            process::exit(1);
        }
        info!("Screenshot saved to {}", path.display());
    }

    if let Some(ref path) = cli.save_state {
        if let Err(e) = save_session(&session, path) {
            error!("Cannot save session: {e}");
            process::exit(1);
        }
    }
}
