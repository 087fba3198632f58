const COMMANDS: &[&str] = &["request_permission", "permission_state"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
