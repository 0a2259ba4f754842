use std::path::{Path, PathBuf};

use countdown_core::{
    ConfigError, CountdownConfig, CountdownConfigExt, CountdownEngine, CountdownError, Language,
    SystemClock, TimeZoneMode,
};

#[derive(Default)]
pub struct AppState {
    pub config: CountdownConfig,
    pub config_path: Option<PathBuf>,
    pub engine: Option<CountdownEngine>,
}

impl AppState {
    pub fn new(config: CountdownConfig) -> Self {
        Self {
            config,
            config_path: None,
            engine: None,
        }
    }

    /// Load configuration from `path`, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => CountdownConfig::load_from(path)?,
            None => CountdownConfig::load()?,
        };

        Ok(Self {
            config,
            config_path: path.map(Path::to_path_buf),
            engine: None,
        })
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_path {
            Some(path) => {
                self.config.save_to(path)?;
                Ok(path.clone())
            }
            None => {
                self.config.save()?;
                CountdownConfig::default_path()
            }
        }
    }

    /// Start a countdown for the configured target, replacing any running one
    pub fn start_engine(&mut self) -> Result<(), CountdownError> {
        let engine = CountdownEngine::from_config(&self.config, SystemClock)?;
        // The previous engine is disposed when dropped
        self.engine = Some(engine);
        Ok(())
    }

    /// Point the countdown at a new target.
    ///
    /// On a parse error neither the config nor the running countdown change.
    pub fn retarget(&mut self, input: &str, mode: TimeZoneMode) -> Result<(), CountdownError> {
        match &mut self.engine {
            Some(engine) => engine.retarget_str(input, mode)?,
            None => {
                let config = CountdownConfig {
                    target: input.to_string(),
                    time_zone: mode,
                    ..self.config.clone()
                };
                self.engine = Some(CountdownEngine::from_config(&config, SystemClock)?);
            }
        }

        self.config.target = input.trim().to_string();
        self.config.time_zone = mode;
        Ok(())
    }

    /// Stop the running countdown. Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        self.engine.as_mut().is_some_and(CountdownEngine::dispose)
    }

    pub fn toggle_language(&mut self) -> Language {
        self.config.language = self.config.language.toggled();
        self.config.language
    }
}
