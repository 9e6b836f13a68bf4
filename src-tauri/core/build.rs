fn main() {
    use std::env;

    // Build-time injection:
    // - GALLERY_DEFAULT_ALBUM=<name>：默认相册目录名（Pictures/<name>）
    // - Expose to Rust code via env!("GALLERY_DEFAULT_ALBUM")
    println!("cargo:rerun-if-env-changed=GALLERY_DEFAULT_ALBUM");

    let album = env::var("GALLERY_DEFAULT_ALBUM")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && !s.contains(['/', '\\']))
        .unwrap_or_else(|| "AI_Skin".to_string());

    println!("cargo:rustc-env=GALLERY_DEFAULT_ALBUM={}", album);
}
