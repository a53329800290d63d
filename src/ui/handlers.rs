//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (folder selection, next_page, prev_page)
//! using the appropriate threading model for each operation type.

use crate::presets::{self, PresetGroup};
use crate::services::{NavigationService, PageView};
use crate::state::AppState;
use crate::status::StatusMessage;
use crate::ui::image_display::load_and_display_image;
use log::{info, warn};
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::path::PathBuf;

/// Pushes a page view to the UI: status line, buttons, and the page itself.
fn apply_view(ui: &crate::AppWindow, view: PageView, state: &AppState) {
    crate::ui::set_status(ui, &view.status);
    crate::ui::set_navigation_info(ui, view.index, view.total);

    match view.current {
        Some(path) => load_and_display_image(ui.as_weak(), path, state),
        None => crate::ui::clear_page_image(ui),
    }
}

/// Scans `folder` on the calling (UI) thread and shows its first page.
///
/// A failed scan keeps the current gallery and only updates the status line.
pub fn open_folder(ui: &crate::AppWindow, state: &AppState, folder: PathBuf) {
    info!("Opening folder {}", folder.display());
    crate::ui::set_status(ui, &StatusMessage::Scanning(folder.clone()));

    let navigation = NavigationService::new(state.session.clone());
    match navigation.open_folder(&folder) {
        Ok(view) => {
            if let Ok(mut cache) = state.image_cache.lock() {
                cache.clear();
            }
            apply_view(ui, view, state);
        }
        Err(err) => {
            let status = StatusMessage::from_load_error(&err);
            crate::ui::set_error(ui, &err, status);
        }
    }
}

fn open_preset(ui: &crate::AppWindow, state: &AppState, group: PresetGroup, index: i32) {
    let preset = usize::try_from(index)
        .ok()
        .and_then(|index| presets::resolve(group, index));

    match preset {
        Some(preset) => open_folder(ui, state, preset.path),
        None => warn!("No {:?} folder preset at index {}", group, index),
    }
}

fn step_page(ui: &crate::AppWindow, state: &AppState, forward: bool) {
    let navigation = NavigationService::new(state.session.clone());
    let result = if forward {
        navigation.next()
    } else {
        navigation.previous()
    };

    match result {
        Ok(Some(view)) => apply_view(ui, view, state),
        Ok(None) => {}
        Err(err) => {
            let status = StatusMessage::ScanFailed(err.to_string());
            crate::ui::set_error(ui, &err, status);
        }
    }
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: AppState) {
    let labels = |group: PresetGroup| -> Vec<String> {
        presets::presets(group)
            .into_iter()
            .map(|preset| preset.label)
            .collect()
    };
    crate::ui::set_folder_presets(ui, labels(PresetGroup::Common), labels(PresetGroup::Manual));
    crate::ui::set_status(ui, &StatusMessage::Prompt);

    ui.global::<crate::Logic>().on_open_common_folder({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |index| {
            if let Some(ui) = ui_handle.upgrade() {
                open_preset(&ui, &state, PresetGroup::Common, index);
            }
        }
    });

    ui.global::<crate::Logic>().on_open_manual_folder({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |index| {
            if let Some(ui) = ui_handle.upgrade() {
                open_preset(&ui, &state, PresetGroup::Manual, index);
            }
        }
    });

    // AsyncFileDialog must run on the main thread, so spawn_local rather than rayon.
    ui.global::<crate::Logic>().on_pick_folder({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let state = state.clone();
            let spawned = slint::spawn_local(async move {
                let picked = AsyncFileDialog::new()
                    .set_directory(presets::storage_root())
                    .pick_folder()
                    .await;

                let Some(ui) = ui_handle.upgrade() else {
                    return;
                };
                match picked {
                    Some(handle) => open_folder(&ui, &state, handle.path().to_path_buf()),
                    None => info!("Folder selection cancelled"),
                }
            });
            if let Err(e) = spawned {
                warn!("Failed to open folder dialog: {}", e);
            }
        }
    });

    ui.global::<crate::Logic>().on_next_page({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                step_page(&ui, &state, true);
            }
        }
    });

    ui.global::<crate::Logic>().on_prev_page({
        let ui_handle = ui.as_weak();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                step_page(&ui, &state, false);
            }
        }
    });
}
