//! Template assembly: expands a game type into a starter project on disk.

pub mod files;

use crate::catalog;
use crate::error::TemplateGenerationError;
use crate::io::ProjectFs;
use crate::paths;
use crate::types::GameKind;
use std::path::{Path, PathBuf};

pub struct TemplateEngine<'a> {
    fs: &'a dyn ProjectFs,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(fs: &'a dyn ProjectFs) -> Self {
        Self { fs }
    }

    /// Write the starter project for `game_name` under `project_path` and
    /// return the generated root.
    ///
    /// Directories are created idempotently and existing files are
    /// overwritten. There is no cleanup on failure: whatever was written
    /// before the failing step stays on disk.
    pub fn generate_template(
        &self,
        game_type: &GameKind,
        game_name: &str,
        project_path: &Path,
    ) -> Result<PathBuf, TemplateGenerationError> {
        let bundle = catalog::bundle_for(game_type);
        let root = paths::project_dir(project_path, game_name);
        let dir_name = paths::project_dir_name(game_name);
        if game_type.known().is_none() {
            tracing::warn!(game_type = %game_type, "unknown game type, using arcade template");
        }
        tracing::info!(root = %root.display(), template = bundle.name, "generating project");

        self.ensure_dir(&root)?;
        for sub in paths::PROJECT_SUBDIRS {
            self.ensure_dir(&root.join(sub))?;
        }

        self.write_json(&root.join("package.json"), &files::package_json(&dir_name))?;
        self.write(&root.join("vite.config.ts"), files::VITE_CONFIG)?;
        self.write_json(&root.join("tsconfig.json"), &files::tsconfig())?;
        self.write_json(&root.join("tsconfig.node.json"), &files::tsconfig_node())?;
        self.write(&root.join("tailwind.config.js"), files::TAILWIND_CONFIG)?;
        self.write(&root.join("postcss.config.js"), files::POSTCSS_CONFIG)?;
        self.write(&root.join("index.html"), &files::index_html(game_name))?;
        self.write(&root.join("src/main.tsx"), files::MAIN_TSX)?;
        self.write(&root.join("src/index.css"), files::INDEX_CSS)?;
        self.write(&root.join("src/App.tsx"), files::APP_TSX)?;

        let screens = root.join("src/screens");
        self.write(&screens.join("StartScreen.tsx"), &files::start_screen(game_name))?;
        self.write(&screens.join("GameOverScreen.tsx"), files::GAME_OVER_SCREEN)?;
        self.write(&screens.join("GameScreen.tsx"), bundle.play_screen)?;

        for component in bundle.scaffold_components {
            self.write(
                &root.join(format!("src/components/{component}.tsx")),
                &files::component_stub(component),
            )?;
        }

        let hook = catalog::input_hook_for(game_type);
        self.write(
            &root.join(format!("src/hooks/{hook}.ts")),
            &files::input_hook(hook),
        )?;

        Ok(root)
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), TemplateGenerationError> {
        self.fs
            .ensure_dir(path)
            .map_err(|source| TemplateGenerationError::CreateDir {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), TemplateGenerationError> {
        tracing::debug!(path = %path.display(), "write");
        self.fs
            .write_file(path, content)
            .map_err(|source| TemplateGenerationError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write_json(
        &self,
        path: &Path,
        value: &serde_json::Value,
    ) -> Result<(), TemplateGenerationError> {
        tracing::debug!(path = %path.display(), "write");
        self.fs
            .write_json(path, value)
            .map_err(|source| TemplateGenerationError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
