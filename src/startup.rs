use crate::config::{WINDOW_SIZE, WINDOW_TITLE};
use crate::state::AppState;
use slint::ComponentHandle;
use std::ffi::OsString;
use std::path::PathBuf;

/// First argument that is not a flag, taken as the folder to open.
fn startup_folder_from_args<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .skip(1)
        .find(|arg| !arg.to_string_lossy().starts_with('-'))
        .map(PathBuf::from)
}

/// Applies window settings and opens the folder given on the command line, if any.
pub fn configure_startup_opening(app: &crate::AppWindow, app_state: &AppState) {
    app.set_window_title(WINDOW_TITLE.into());
    app.window()
        .set_size(slint::LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1));

    if let Some(folder) = startup_folder_from_args(std::env::args_os()) {
        crate::ui::open_folder(app, app_state, folder);
    }
}
