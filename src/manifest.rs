use crate::config::PackConfig;
use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use crate::utils;
use walkdir::WalkDir;

/// Ordered list of paths, relative to the extension directory, slated for the archive.
///
/// Required entries are listed whether or not they exist; the archive writer
/// warns about the missing ones. Optional entries and asset files are only
/// listed when present. No deduplication is done.
#[derive(Debug, Default, Clone)]
pub struct FileManifest {
    entries: Vec<String>,
}

impl FileManifest {
    /// Assemble the manifest for the given layout
    pub fn build(ctx: &Context, config: &PackConfig) -> Result<Self> {
        let mut manifest = Self::default();

        manifest.entries.extend(config.required.iter().cloned());

        for optional in &config.optional {
            if ctx.base_dir.join(optional).exists() {
                manifest.push(optional.clone());
            }
        }

        for dir in &config.assets {
            manifest.collect_assets(ctx, dir)?;
        }

        Ok(manifest)
    }

    fn collect_assets(&mut self, ctx: &Context, dir: &str) -> Result<()> {
        let root = ctx.base_dir.join(dir);
        if !root.is_dir() {
            return Ok(());
        }

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                continue;
            }

            if utils::is_hidden(entry.file_name()) {
                if ctx.verbose {
                    println!("  Skipping hidden file: {}", path.display());
                }
                continue;
            }

            let relative = path.strip_prefix(&ctx.base_dir).map_err(|_| {
                Error::custom(format!(
                    "{} is outside {}",
                    path.display(),
                    ctx.base_dir.display()
                ))
            })?;
            self.push(utils::entry_name(relative));
        }

        Ok(())
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
