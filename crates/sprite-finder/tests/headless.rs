//! Headless pipeline: assets on disk, scripted keys, screenshot and state.

use std::fs;
use std::path::PathBuf;

use c64_raster::snapshot::SNAPSHOT_SIZE;
use c64_raster::{Palette, Scene, SpriteMode};
use sprite_finder::app::{initial_session, run_browser};
use sprite_finder::assets::{find_roms_dir, load_glyphs, load_snapshot};
use sprite_finder::capture::save_screenshot;
use sprite_finder::config::CliArgs;
use sprite_finder::state::{load_session, save_session};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sprite-finder-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn parse(args: &[String]) -> CliArgs {
    CliArgs::parse(args.iter().cloned()).expect("valid args")
}

#[test]
fn scripted_run_writes_screenshot_and_state() {
    let dir = temp_dir("run");
    let snap = dir.join("snap");
    let rom = dir.join("chargen.rom");
    let png = dir.join("out.png");
    let state = dir.join("state.json");

    let mut snapshot = vec![0; SNAPSHOT_SIZE];
    snapshot[132 + 64..132 + 64 + 63].fill(0xFF);
    fs::write(&snap, snapshot).expect("write snapshot");
    fs::write(&rom, vec![0xFF; 4096]).expect("write ROM");

    let cli = parse(&[
        snap.display().to_string(),
        "--font".into(),
        rom.display().to_string(),
        "--frames".into(),
        "5".into(),
        "--keys".into(),
        "m 1".into(),
        "--screenshot".into(),
        png.display().to_string(),
    ]);

    let mut session = initial_session(&cli).expect("session");
    let scene = Scene::new(
        Palette::default(),
        load_glyphs(cli.font.as_deref().expect("font set")).expect("ROM loads"),
        load_snapshot(&cli.snapshot).expect("snapshot loads"),
    );
    let fb = run_browser(&cli, &scene, &mut session);

    assert_eq!(session.mode, SpriteMode::HiRes);
    assert_eq!(session.sprite_index, 1);
    assert_eq!(session.bg, 1);

    // Sprite 1 is now in the first cell, drawn in fg0 (light grey, 0xF).
    let grey = Palette::default().bgra(0xF);
    assert_eq!(fb.pixel(32, 80), Some(grey));

    save_screenshot(&fb, &png).expect("screenshot");
    assert!(fs::metadata(&png).expect("PNG exists").len() > 0);

    save_session(&session, &state).expect("save state");
    assert_eq!(load_session(&state).expect("load state"), session);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn state_file_seeds_the_session() {
    let dir = temp_dir("state");
    let state = dir.join("state.json");
    fs::write(&state, r#"{"mode": "HiRes", "sprite_index": 40, "offset": 0}"#)
        .expect("write state");

    let cli = parse(&[
        "--state".into(),
        state.display().to_string(),
        "--offset".into(),
        "64".into(),
    ]);
    let session = initial_session(&cli).expect("session");
    assert_eq!(session.mode, SpriteMode::HiRes);
    assert_eq!(session.sprite_index, 40);
    assert_eq!(session.offset, 64, "flags win over the state file");

    let _ = fs::remove_dir_all(dir);
}

#[test]
#[ignore] // Requires the C64 character ROM at roms/
fn real_character_rom_renders_labels() {
    let rom = find_roms_dir().join("chargen.rom");
    let glyphs = load_glyphs(&rom).expect("roms/chargen.rom");
    let scene = Scene::new(
        Palette::default(),
        glyphs,
        c64_raster::Snapshot::from_bytes(vec![0; SNAPSHOT_SIZE]).expect("snapshot"),
    );
    let mut fb = Scene::framebuffer();
    scene.compose(&mut fb, &c64_raster::Session::default());

    // '#' has ink in its top row; the label uses colours 5 and 6.
    let palette = scene.palette();
    let ink = [palette.bgra(5), palette.bgra(6)];
    assert!((0..32).any(|x| fb.pixel(x, 4).is_some_and(|px| ink.contains(&px))));
}
