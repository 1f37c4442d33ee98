use crate::config::PackConfig;
use crate::context::Context;
use crate::error::Error;
use crate::manifest::FileManifest;
use crate::result::Result;
use crate::utils;
use std::collections::HashSet;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Outcome of a successful packaging run
#[derive(Debug)]
pub struct PackageReport {
    /// Absolute path of the written archive
    pub archive_path: PathBuf,
    /// Archive size in bytes
    pub size: u64,
    pub added: Vec<String>,
    /// Manifest entries that did not exist and were skipped
    pub missing: Vec<String>,
}

impl PackageReport {
    pub fn size_kb(&self) -> String {
        utils::format_kb(self.size)
    }
}

/// Assemble the manifest for `config` and write it to `output`
pub fn package(ctx: &Context, config: &PackConfig, output: &Path) -> Result<PackageReport> {
    let manifest = FileManifest::build(ctx, config)?;
    if manifest.is_empty() {
        return Err("nothing to package".into());
    }

    if ctx.verbose {
        println!("{} files listed:", manifest.len());
        for entry in manifest.entries() {
            println!("  {}", entry);
        }
    }

    create_zip(ctx, &manifest, output)
}

/// Write every existing manifest entry into a fresh deflate zip at `output`.
///
/// Missing entries are reported and skipped. If writing fails after the
/// archive was created, the partial archive is removed and the error returned.
pub fn create_zip(ctx: &Context, manifest: &FileManifest, output: &Path) -> Result<PackageReport> {
    println!("Packaging extension into '{}'...", output.display());
    println!("{}", "-".repeat(40));

    let file = File::create(output)?;
    let written = output
        .canonicalize()
        .map_err(Error::from)
        .and_then(|archive_path| {
            write_members(ctx, manifest, file, &archive_path).map(|members| (archive_path, members))
        });

    let (archive_path, (added, missing)) = match written {
        Ok(written) => written,
        Err(e) => {
            let _ = fs::remove_file(output);
            return Err(e);
        }
    };

    println!("{}", "-".repeat(40));

    let size = fs::metadata(&archive_path)?.len();

    Ok(PackageReport {
        archive_path,
        size,
        added,
        missing,
    })
}

pub fn missing_warning(entry: &str) -> String {
    format!("  Warning: File not found: {}", entry)
}

fn write_members(
    ctx: &Context,
    manifest: &FileManifest,
    file: File,
    archive_path: &Path,
) -> Result<(Vec<String>, Vec<String>)> {
    let mut zip = ZipWriter::new(file);

    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut added = Vec::new();
    let mut missing = Vec::new();
    let mut seen = HashSet::new();

    for entry in manifest.entries() {
        let path = ctx.base_dir.join(entry);

        if !path.exists() {
            println!("{}", missing_warning(entry));
            missing.push(entry.clone());
            continue;
        }

        if path.canonicalize()?.as_path() == archive_path {
            if ctx.verbose {
                println!("  Skipping output archive: {}", entry);
            }
            continue;
        }

        // zip rejects duplicate member names
        if !seen.insert(entry.as_str()) {
            if ctx.verbose {
                println!("  Skipping duplicate: {}", entry);
            }
            continue;
        }

        println!("  Adding: {}", entry);

        let metadata = fs::metadata(&path)?;
        #[allow(unused_mut)]
        let mut member_options = options;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            member_options = member_options.unix_permissions(metadata.permissions().mode());
        }

        if metadata.is_dir() {
            zip.add_directory(entry.as_str(), member_options)?;
        } else {
            zip.start_file(entry.as_str(), member_options)?;
            let mut f = File::open(&path)?;
            std::io::copy(&mut f, &mut zip)?;
        }

        added.push(entry.clone());
    }

    zip.finish()?;
    Ok((added, missing))
}
