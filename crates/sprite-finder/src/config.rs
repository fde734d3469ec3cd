//! Command-line configuration.

use std::path::PathBuf;

use c64_raster::Rotation;

/// Snapshot file used when none is given.
pub const DEFAULT_SNAPSHOT: &str = "snap";

/// Default magnification of cut sprites.
pub const DEFAULT_CUT_SCALE: usize = 2;

pub const USAGE: &str = "\
Usage: sprite-finder [OPTIONS] [SNAPSHOT]

Browse the sprites of a C64 memory snapshot (headless).

Options:
  --snapshot <file>     Memory snapshot [default: snap]
  --font <file>         Character ROM [default: roms/chargen.rom]
  --frames <n>          Frames to run [default: 1]
  --keys <text>         Scripted keys, one per frame (\\n Return, \\e Escape, \\b Backspace)
  --keys-at <frame>     Frame of the first scripted key [default: 0]
  --screenshot <file>   Save the last frame as PNG
  --hires               Start in hi-res mode
  --sprite <n>          First sprite shown
  --offset <n>          Base offset of sprite 0 in the snapshot
  --state <file>        Load the session from JSON
  --save-state <file>   Save the session as JSON when done
  --cut <n>             Print sprite n as a C array instead of browsing
  --cut-count <n>       Number of sprites to cut [default: 1]
  --cut-scale <n>       Magnification of cut sprites [default: 2]
  --outline <colour>    Outline cut sprites in a palette colour
  --mirror-h            Mirror cut sprites left-right
  --mirror-v            Mirror cut sprites top-bottom
  --rotate <deg>        Rotate cut sprites by 90, -90 or 180 degrees
  -h, --help            Show this help

Keys: 1-4 / ! \" # \u{a4} colours up/down, m mode, space / backspace sprite +/-1,
      w/s sprite -/+32, a/d offset -/+1, Return next bank, Escape quit";

/// Parsed command-line arguments.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub snapshot: PathBuf,
    pub font: Option<PathBuf>,
    pub frames: u64,
    pub keys: Option<String>,
    pub keys_at: u64,
    pub screenshot: Option<PathBuf>,
    pub hires: bool,
    pub sprite: Option<u16>,
    pub offset: Option<i64>,
    pub state: Option<PathBuf>,
    pub save_state: Option<PathBuf>,
    pub cut: Option<u16>,
    pub cut_count: u16,
    pub cut_scale: usize,
    pub outline: Option<u8>,
    pub mirror_h: bool,
    pub mirror_v: bool,
    pub rotate: Option<Rotation>,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from(DEFAULT_SNAPSHOT),
            font: None,
            frames: 1,
            keys: None,
            keys_at: 0,
            screenshot: None,
            hires: false,
            sprite: None,
            offset: None,
            state: None,
            save_state: None,
            cut: None,
            cut_count: 1,
            cut_scale: DEFAULT_CUT_SCALE,
            outline: None,
            mirror_h: false,
            mirror_v: false,
            rotate: None,
            help: false,
        }
    }
}

impl CliArgs {
    /// Parse arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = Self::default();
        let mut positional = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| format!("{name} needs a value"))
            };
            match arg.as_str() {
                "--snapshot" => cli.snapshot = PathBuf::from(value("--snapshot")?),
                "--font" => cli.font = Some(PathBuf::from(value("--font")?)),
                "--frames" => cli.frames = number("--frames", &value("--frames")?)?,
                "--keys" => cli.keys = Some(value("--keys")?),
                "--keys-at" => cli.keys_at = number("--keys-at", &value("--keys-at")?)?,
                "--screenshot" => cli.screenshot = Some(PathBuf::from(value("--screenshot")?)),
                "--hires" => cli.hires = true,
                "--sprite" => cli.sprite = Some(number("--sprite", &value("--sprite")?)?),
                "--offset" => cli.offset = Some(number("--offset", &value("--offset")?)?),
                "--state" => cli.state = Some(PathBuf::from(value("--state")?)),
                "--save-state" => cli.save_state = Some(PathBuf::from(value("--save-state")?)),
                "--cut" => cli.cut = Some(number("--cut", &value("--cut")?)?),
                "--cut-count" => cli.cut_count = number("--cut-count", &value("--cut-count")?)?,
                "--cut-scale" => {
                    cli.cut_scale = number("--cut-scale", &value("--cut-scale")?)?;
                    if cli.cut_scale == 0 {
                        return Err("--cut-scale must be at least 1".to_string());
                    }
                }
                "--outline" => {
                    let colour: u8 = number("--outline", &value("--outline")?)?;
                    if colour > 0x0F {
                        return Err(format!("--outline: colour {colour} is not 0-15"));
                    }
                    cli.outline = Some(colour);
                }
                "--mirror-h" => cli.mirror_h = true,
                "--mirror-v" => cli.mirror_v = true,
                "--rotate" => {
                    let degrees: i32 = number("--rotate", &value("--rotate")?)?;
                    cli.rotate = Some(
                        Rotation::from_degrees(degrees)
                            .ok_or_else(|| format!("--rotate: {degrees} is not 90, -90 or 180"))?,
                    );
                }
                "--help" | "-h" => cli.help = true,
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(format!("Unknown argument: {other}"));
                }
                other => {
                    if positional {
                        return Err(format!("Unexpected argument: {other}"));
                    }
                    cli.snapshot = PathBuf::from(other);
                    positional = true;
                }
            }
        }

        Ok(cli)
    }
}

fn number<T: std::str::FromStr>(name: &str, text: &str) -> Result<T, String> {
    text.parse()
        .map_err(|_| format!("{name}: invalid number {text:?}"))
}
