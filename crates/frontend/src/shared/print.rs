/// Open the browser print dialog (also used for "save as PDF").
///
/// Interactive chrome is hidden by the print stylesheet in `index.html`.
pub fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.print() {
            log::warn!("print failed: {:?}", err);
        }
    }
}
