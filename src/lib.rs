use tauri::{Manager, Url};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Push bridge first: its notification delegate must be installed before
    // the webview runtime attaches its own listeners.
    let builder = tauri::Builder::default()
        .plugin(tauri_plugin_push_bridge::init())
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            // Always load the hosted app so the wrapper uses a stable origin
            if let Some(window) = app.get_webview_window("main") {
                let url = Url::parse("https://app.lumen.dev")?;
                window.set_title("")?;
                window.navigate(url)?;
            }
            Ok(())
        });

    builder
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
