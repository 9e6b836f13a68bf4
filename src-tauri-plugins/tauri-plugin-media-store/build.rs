const COMMANDS: &[&str] = &["save_image", "invoke_method"];

fn main() {
  tauri_plugin::Builder::new(COMMANDS)
    .android_path("android")
    .build();
}
