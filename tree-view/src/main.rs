//! Application entry point for the evergreen tree studio.
//!
//! This binary sets up eframe/egui and delegates all interactive
//! logic and rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// All parameter editing and scene painting are handled by [`Viewer`];
/// the generated scene itself comes from `tree-core`.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Evergreen Tree",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
