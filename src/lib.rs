pub mod catalog;
pub mod patch;

pub use crate::patch::FileOutcome;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub lang_dir: PathBuf,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            lang_dir: PathBuf::from(catalog::LANG_DIR),
        }
    }
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    println!("Updating {} translations...", catalog::TOOLTIP_KEY);
    for (filename, translation) in catalog::TRANSLATIONS.entries() {
        let path = opts.lang_dir.join(filename);
        match patch::patch_file(&path, translation)? {
            FileOutcome::Missing => println!("File {} not found, skipping...", path.display()),
            FileOutcome::Updated => println!("Updated {filename}"),
            FileOutcome::NoMatch => {
                println!("No {} found in {filename}", catalog::TOOLTIP_KEY)
            }
        }
    }
    println!("Done!");
    Ok(())
}
