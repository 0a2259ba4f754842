use std::sync::Arc;

use countdown_core::TimeZoneMode;
use tokio::sync::RwLock;

use crate::app_state::AppState;
use crate::display::{labels, render_frame};

pub async fn status(state: Arc<RwLock<AppState>>) -> String {
    let s = state.read().await;
    let language = s.config.language;

    let Some(engine) = &s.engine else {
        return format!("no countdown running (configured target: {})", s.config.target);
    };

    let phase = if engine.snapshot().expired {
        "expired"
    } else if engine.is_running() {
        "running"
    } else {
        "stopped"
    };

    format!(
        "{}: {}\ntarget: {} [{}] ({phase})",
        labels(language).title,
        render_frame(&engine.snapshot(), language),
        engine.target().input(),
        engine.target(),
    )
}

pub async fn retarget(
    state: Arc<RwLock<AppState>>,
    target: &str,
    utc: bool,
) -> Result<String, String> {
    let mut s = state.write().await;
    let mode = if utc {
        TimeZoneMode::Utc
    } else {
        s.config.time_zone
    };

    s.retarget(target, mode).map_err(|e| e.to_string())?;
    Ok(format!("counting down to {}", s.config.target))
}

pub async fn stop(state: Arc<RwLock<AppState>>) -> String {
    let mut s = state.write().await;
    if s.stop() {
        "countdown stopped".to_string()
    } else {
        "no countdown running".to_string()
    }
}

pub async fn toggle_language(state: Arc<RwLock<AppState>>) -> String {
    let mut s = state.write().await;
    let language = s.toggle_language();
    format!("language: {}", language.code())
}

pub async fn show_config(state: Arc<RwLock<AppState>>) -> String {
    let s = state.read().await;
    let c = &s.config;
    format!(
        "target = {}\ntime_zone = {:?}\nterminal_frame = {:?}\ntick_interval_ms = {}\nlanguage = {}",
        c.target,
        c.time_zone,
        c.terminal_frame,
        c.tick_interval_ms,
        c.language.code()
    )
}

pub async fn save_config(state: Arc<RwLock<AppState>>) -> Result<String, String> {
    let s = state.read().await;
    let path = s.save().map_err(|e| e.to_string())?;
    Ok(format!("saved configuration to {}", path.display()))
}
