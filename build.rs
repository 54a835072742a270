use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // The seed is embedded with include_str!; the landing page assets are
    // served from disk but tracked so dev rebuilds log a fresh build id.
    println!("cargo:rerun-if-changed=seed/activities.json");
    rerun_if_assets_changed("static");

    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITIES_BUILD_ID={}", build_id);
}

// The static dir is flat: index.html, app.js, styles.css.
fn rerun_if_assets_changed(dir: impl AsRef<Path>) {
    let Ok(entries) = fs::read_dir(dir.as_ref()) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        let is_asset = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("html" | "js" | "css")
        );
        if is_asset {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
