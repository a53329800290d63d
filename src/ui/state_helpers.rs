//! Helper functions to set groups of ViewState properties together.

use crate::error::GalleryError;
use crate::status::StatusMessage;
use log::error;
use slint::ComponentHandle;

/// Sets the status line.
pub fn set_status(ui: &crate::AppWindow, status: &StatusMessage) {
    ui.global::<crate::ViewState>()
        .set_status_text(status.to_string().into());
}

/// Logs an error and shows it in the status line.
pub fn set_error(ui: &crate::AppWindow, err: &GalleryError, status: StatusMessage) {
    error!("{}", err);
    set_status(ui, &status);
}

/// Sets the Previous/Next button state from the page position.
///
/// `index` is `None` for an empty gallery, which disables both buttons.
pub fn set_navigation_info(ui: &crate::AppWindow, index: Option<usize>, total: usize) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_has_prev(matches!(index, Some(i) if i > 0));
    view_state.set_has_next(matches!(index, Some(i) if i + 1 < total));
}

/// Shows a decoded page.
pub fn set_page_image(ui: &crate::AppWindow, image: slint::Image) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_page_image(image);
    view_state.set_image_loaded(true);
}

/// Hides the page area, used for an empty gallery.
pub fn clear_page_image(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_page_image(slint::Image::default());
    view_state.set_image_loaded(false);
}

/// Fills the folder dialog lists.
pub fn set_folder_presets(ui: &crate::AppWindow, common: Vec<String>, manual: Vec<String>) {
    let to_model = |labels: Vec<String>| {
        let labels: Vec<slint::SharedString> = labels.into_iter().map(Into::into).collect();
        slint::ModelRc::new(slint::VecModel::from(labels))
    };

    let view_state = ui.global::<crate::ViewState>();
    view_state.set_common_folders(to_model(common));
    view_state.set_manual_folders(to_model(manual));
}
