//! Build script for facebot-firmware
//!
//! - Sets up linker search paths and arguments
//! - Validates robot.toml and compiles it into `ROBOT_CONFIG`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use facebot_core::config::{BlinkTiming, ConfigError, DriveSpeeds, RobotConfig, SerialConfig};

fn main() {
    setup_linker();
    let config = load_config();
    write_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate robot.toml
///
/// Missing keys fall back to the defaults in `RobotConfig::DEFAULT`.
fn load_config() -> RobotConfig {
    println!("cargo:rerun-if-changed=robot.toml");

    let config_path = Path::new("robot.toml");
    if !config_path.exists() {
        println!("cargo:warning=robot.toml not found, using built-in defaults");
        return RobotConfig::DEFAULT;
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read robot.toml", &[e.to_string()]),
    };

    let value: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in robot.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    let defaults = RobotConfig::DEFAULT;

    let config = RobotConfig {
        drive: DriveSpeeds {
            straight: read_int(&value, "drive", "straight_speed", defaults.drive.straight, &mut errors),
            turn: read_int(&value, "drive", "turn_speed", defaults.drive.turn, &mut errors),
        },
        blink: BlinkTiming {
            open_ms: read_int(&value, "face", "blink_open_ms", defaults.blink.open_ms, &mut errors),
            closed_ms: read_int(&value, "face", "blink_closed_ms", defaults.blink.closed_ms, &mut errors),
        },
        serial: SerialConfig {
            baudrate: read_int(&value, "serial", "baudrate", defaults.serial.baudrate, &mut errors),
        },
    };

    if !errors.is_empty() {
        fail("Invalid values in robot.toml", &errors);
    }

    if let Err(e) = config.validate() {
        let reason = match e {
            ConfigError::ZeroStraightSpeed => "drive.straight_speed must be above zero",
            ConfigError::TurnNotSlower => "drive.turn_speed must be below drive.straight_speed",
            ConfigError::ZeroDwell => "face.blink_open_ms and face.blink_closed_ms must be above zero",
            ConfigError::ZeroBaudrate => "serial.baudrate must be above zero",
        };
        fail("Rejected robot.toml", &[reason.to_string()]);
    }

    println!("cargo:warning=robot.toml validated successfully");
    config
}

/// Read `[section] key` as an integer that fits `T`
fn read_int<T>(value: &toml::Value, section: &str, key: &str, default: T, errors: &mut Vec<String>) -> T
where
    T: TryFrom<i64> + Copy,
{
    let Some(raw) = value.get(section).and_then(|s| s.get(key)) else {
        return default;
    };
    let Some(n) = raw.as_integer() else {
        errors.push(format!("{}.{} must be an integer", section, key));
        return default;
    };
    match T::try_from(n) {
        Ok(v) => v,
        Err(_) => {
            errors.push(format!("{}.{} = {} is out of range", section, key, n));
            default
        }
    }
}

/// Emit `robot_config.rs` into OUT_DIR
fn write_config(config: &RobotConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let source = format!(
        "/// Robot configuration compiled from robot.toml\n\
         pub const ROBOT_CONFIG: RobotConfig = RobotConfig {{\n    \
             drive: DriveSpeeds {{ straight: {}, turn: {} }},\n    \
             blink: BlinkTiming {{ open_ms: {}, closed_ms: {} }},\n    \
             serial: SerialConfig {{ baudrate: {} }},\n\
         }};\n",
        config.drive.straight,
        config.drive.turn,
        config.blink.open_ms,
        config.blink.closed_ms,
        config.serial.baudrate,
    );
    fs::write(out_dir.join("robot_config.rs"), source).unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| format!("║  • {:<62} ║", truncate_line(line, 62)))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Shorten `line` to at most `width` characters, marking the cut with "..."
fn truncate_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }
    let mut truncated: String = line.chars().take(width.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}
