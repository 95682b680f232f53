//! Build script for glimmer-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates assets.toml and packs the listed images into the flash
//!   archive read by the image store

use std::collections::HashSet;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Archive signature, must match the image store
const ARCHIVE_MAGIC: &[u8; 4] = b"GLIM";

/// Longest name the archive can record
const MAX_NAME_LEN: usize = u8::MAX as usize;

fn main() {
    setup_linker();
    pack_assets();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// One validated manifest entry
struct Asset {
    path: String,
    data: Vec<u8>,
}

/// Validate assets.toml and write the archive to OUT_DIR/images.bin
fn pack_assets() {
    println!("cargo:rerun-if-changed=assets.toml");

    let manifest_path = Path::new("assets.toml");

    if !manifest_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: assets.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires an assets.toml image manifest.            ║\n\
            ║  Please create one in the glimmer-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(manifest_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read assets.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let manifest: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in assets.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let assets = validate_images(&manifest);
    let archive = build_archive(&assets);

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("images.bin")).unwrap();
    f.write_all(&archive).unwrap();

    println!(
        "cargo:warning=assets.toml packed {} image(s), {} bytes",
        assets.len(),
        archive.len()
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check every [[image]] entry and load its file
fn validate_images(manifest: &toml::Value) -> Vec<Asset> {
    let mut errors = Vec::new();
    let mut assets = Vec::new();
    let mut seen = HashSet::new();

    let images = match manifest.get("image").and_then(|v| v.as_array()) {
        Some(images) => images,
        None => {
            // An empty archive still mounts, the slideshow just shows fractals
            println!("cargo:warning=assets.toml lists no [[image]] entries");
            return assets;
        }
    };

    for (i, image) in images.iter().enumerate() {
        let path = image.get("path").and_then(|v| v.as_str());
        let file = image.get("file").and_then(|v| v.as_str());

        let (path, file) = match (path, file) {
            (Some(path), Some(file)) => (path, file),
            _ => {
                errors.push(format!("image[{}]: 'path' and 'file' are required", i));
                continue;
            }
        };

        if !path.starts_with('/') {
            errors.push(format!("image[{}]: path '{}' must start with '/'", i, path));
        }
        if path.len() > MAX_NAME_LEN {
            errors.push(format!("image[{}]: path longer than {} bytes", i, MAX_NAME_LEN));
        }
        if !seen.insert(path.to_string()) {
            errors.push(format!("image[{}]: duplicate path '{}'", i, path));
        }

        println!("cargo:rerun-if-changed={}", file);
        match fs::read(file) {
            Ok(data) if data.starts_with(b"BM") => assets.push(Asset {
                path: path.to_string(),
                data,
            }),
            Ok(_) => errors.push(format!("image[{}]: '{}' is not a BMP file", i, file)),
            Err(e) => errors.push(format!("image[{}]: cannot read '{}': {}", i, file, e)),
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid image entries in assets.toml                     ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    assets
}

/// Serialize assets in the image store archive layout
fn build_archive(assets: &[Asset]) -> Vec<u8> {
    let mut out = ARCHIVE_MAGIC.to_vec();
    out.extend_from_slice(&(assets.len() as u16).to_le_bytes());

    for asset in assets {
        out.push(asset.path.len() as u8);
        out.extend_from_slice(asset.path.as_bytes());
        out.extend_from_slice(&(asset.data.len() as u32).to_le_bytes());
        out.extend_from_slice(&asset.data);
    }

    out
}
